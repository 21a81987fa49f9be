//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Lit, LitInt, parse_macro_input};

/// Derive `Solver` by dispatching each part to its `PartSolver<N>` impl
///
/// # Attributes
///
/// - `parts`: Required. Number of parts (`1..=255`); `PartSolver<1>` through
///   `PartSolver<parts>` must all be implemented.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver)]
/// #[puzzle_solver(parts = 2)]
/// pub struct Solver;
///
/// impl PartSolver<1> for Solver { /* ... */ }
/// impl PartSolver<2> for Solver { /* ... */ }
/// ```
///
/// Part numbers outside `1..=parts` produce `SolveError::PartNotImplemented`.
#[proc_macro_derive(PuzzleSolver, attributes(puzzle_solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_puzzle_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "PuzzleSolver derive requires #[puzzle_solver(parts = N)]",
            )
        })?;

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let lit: LitInt = meta.value()?.parse()?;
            parts = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported puzzle_solver attribute, expected `parts`"))
        }
    })?;

    let parts = parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `parts = N`"))?;
    if parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`parts` must be at least 1"));
    }

    let part_numbers: Vec<Literal> = (1..=parts).map(Literal::u8_unsuffixed).collect();
    let parts_lit = Literal::u8_unsuffixed(parts);

    Ok(quote! {
        impl #impl_generics ::puzzle_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts_lit;

            fn solve_part(
                shared: &mut <Self as ::puzzle_solver::PuzzleParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#part_numbers => <Self as ::puzzle_solver::PartSolver<#part_numbers>>::solve(shared),)*
                    _ => ::core::result::Result::Err(::puzzle_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for registering a solver with the plugin system
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["search", "grid"])
///
/// The type must be a unit struct implementing `Solver`; otherwise the
/// generated trait-bound check fails to compile.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver, AutoRegisterSolver)]
/// #[puzzle_solver(parts = 2)]
/// #[puzzle(year = 2024, day = 16, tags = ["search", "grid"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolver derive requires #[puzzle(year = .., day = ..)]",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new_spanned(lit, "day must be in 1..=25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit_str) => tags.push(lit_str.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be strings")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported puzzle attribute, expected year, day or tags"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day`"))?;
    let year_lit = Literal::u16_unsuffixed(year);
    let day_lit = Literal::u8_unsuffixed(day);
    let tag_strs = tags.iter().map(String::as_str);

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::puzzle_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                year: #year_lit,
                day: #day_lit,
                solver: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    })
}
