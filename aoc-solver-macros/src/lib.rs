//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Attribute, DeriveInput, Lit, LitStr, parse_macro_input};

/// Derive `aoc_solver::Solver` by dispatching part numbers to `PartSolver<N>` impls
///
/// # Attributes
///
/// - `max_parts`: Required. Number of finished parts; parts `1..=max_parts` are dispatched to
///   `PartSolver<1>`..`PartSolver<max_parts>`, which must all be implemented. `0` is allowed
///   for a freshly scaffolded day.
///
/// Any other part number yields `SolveError::PartNotImplemented(part)`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// pub struct Solver;
///
/// impl AocParser for Solver { /* ... */ }
/// impl PartSolver<1> for Solver { /* ... */ }
/// impl PartSolver<2> for Solver { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = find_attr(&input.attrs, "aoc_solver", name.span())?;
    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: syn::LitInt = meta.value()?.parse()?;
            max_parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver property, expected `max_parts`"))
        }
    })?;
    let max_parts = max_parts
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required `max_parts = N`"))?;

    let arms = (1..=max_parts).map(|part| {
        let lit = Literal::u8_unsuffixed(part);
        quote! {
            #lit => <Self as ::aoc_solver::PartSolver<#lit>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            #[allow(unused_variables)]
            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates an `inventory::submit!` of an `aoc_solver::SolverPlugin` pointing at the
/// annotated unit struct, so `SolverRegistryBuilder::register_all_plugins` picks it up.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2025)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "bfs"])
///
/// # Requirements
///
/// The type must implement `Solver` (usually via `#[derive(AocSolver)]`); otherwise the
/// generated compile-time check fails with `the trait bound YourSolver: Solver is not
/// satisfied`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2025, day = 5, tags = ["ranges"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = find_attr(&input.attrs, "aoc", name.span())?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => year = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "year must be an integer")),
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            match value {
                Lit::Int(lit_int) => day = Some(lit_int.base10_parse()?),
                other => return Err(syn::Error::new_spanned(other, "day must be an integer")),
            }
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                tags.push(content.parse()?);
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc property, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?;
    if !(1..=25).contains(&day) {
        return Err(syn::Error::new_spanned(attr, "day must be between 1 and 25"));
    }

    Ok(quote! {
        const _: () = {
            // Nicer error than the one inventory would produce
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn find_attr<'a>(attrs: &'a [Attribute], ident: &str, span: Span) -> syn::Result<&'a Attribute> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident(ident))
        .ok_or_else(|| syn::Error::new(span, format!("missing #[{ident}(...)] attribute")))
}
