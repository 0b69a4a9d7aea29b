//! Procedural macro implementation used by `dimq-core`.
//!
//! `dimq-macros` is an implementation detail of this workspace. Users reach it through the `dim!` macro exported by
//! `dimq-core` (and re-exported by `dimq`), which forwards its own `$crate` path as the first token so the expansion
//! resolves no matter how the core crate was renamed.
//!
//! # Input
//!
//! `dim!(mass = 1, length = 2, time = -2)`
//!
//! - keys: `mass`, `length`, `time`, `current`, `temperature`, `luminosity`, `amount`
//! - values: integer literals, optionally negated, in `-64..=64`
//! - omitted keys default to zero; each key may appear at most once
//!
//! # Output
//!
//! `<crate>::Dim<E0, …, E6>` where every `Ei` is the matching `typenum` constant (`Z0`, `P3`, `N2`, …).

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2, TokenTree};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Ident, LitInt, Token,
};

/// Axis names, in the order of the `Dim` type parameters.
const AXES: [&str; 7] = [
    "mass",
    "length",
    "time",
    "current",
    "temperature",
    "luminosity",
    "amount",
];

/// Largest exponent magnitude accepted by `dim!`.
const MAX_EXPONENT: i32 = 64;

/// Expand `$crate; key = exponent, …` into a `Dim<…>` type.
///
/// Not meant to be called directly; use `dimq_core::dim!`.
#[proc_macro]
pub fn dim_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DimInput);

    match dim_type_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn dim_type_impl(input: DimInput) -> syn::Result<TokenStream2> {
    let krate = &input.krate;
    let exponents = input.exponents.iter().map(|e| exponent_ident(*e));

    Ok(quote! {
        #krate::Dim<#(#krate::typenum::consts::#exponents),*>
    })
}

fn exponent_ident(exponent: i32) -> Ident {
    match exponent {
        0 => format_ident!("Z0"),
        e if e > 0 => format_ident!("P{}", e.unsigned_abs()),
        e => format_ident!("N{}", e.unsigned_abs()),
    }
}

/// Parsed contents of a `dim!` invocation.
struct DimInput {
    /// Path to the core crate, as forwarded by `dim!`.
    krate: TokenStream2,
    exponents: [i32; 7],
}

impl Parse for DimInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut krate = TokenStream2::new();
        while !input.peek(Token![;]) {
            if input.is_empty() {
                return Err(input.error("expected `;` after the crate path"));
            }
            let tt: TokenTree = input.parse()?;
            krate.extend(Some(tt));
        }
        input.parse::<Token![;]>()?;

        let mut exponents = [0i32; 7];
        let mut seen = [false; 7];

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            let axis = AXES
                .iter()
                .position(|name| key == *name)
                .ok_or_else(|| {
                    syn::Error::new(
                        key.span(),
                        format!("unknown dimension `{}`, expected one of: {}", key, AXES.join(", ")),
                    )
                })?;
            if seen[axis] {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate dimension `{}`", key),
                ));
            }
            seen[axis] = true;

            input.parse::<Token![=]>()?;
            let negative = input.peek(Token![-]);
            if negative {
                input.parse::<Token![-]>()?;
            }
            let lit: LitInt = input.parse()?;
            let magnitude: i32 = lit.base10_parse()?;
            if magnitude > MAX_EXPONENT {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("exponent out of range, expected at most {} in magnitude", MAX_EXPONENT),
                ));
            }
            exponents[axis] = if negative { -magnitude } else { magnitude };

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            } else if !input.is_empty() {
                return Err(input.error("expected `,` between dimensions"));
            }
        }

        if krate.is_empty() {
            return Err(syn::Error::new(Span::call_site(), "missing crate path"));
        }

        Ok(DimInput { krate, exponents })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse(tokens: TokenStream2) -> syn::Result<DimInput> {
        syn::parse2(tokens)
    }

    #[test]
    fn test_parse_velocity() {
        let input = parse(quote! { dimq_core; length = 1, time = -1 }).unwrap();
        assert_eq!(input.exponents, [0, 1, -1, 0, 0, 0, 0]);
        assert_eq!(input.krate.to_string(), "dimq_core");
    }

    #[test]
    fn test_parse_every_axis() {
        let input = parse(quote! {
            krate; mass = 1, length = 2, time = 3, current = 4, temperature = 5, luminosity = 6, amount = 7
        })
        .unwrap();
        assert_eq!(input.exponents, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_parse_order_does_not_matter() {
        let a = parse(quote! { k; time = -2, mass = 1 }).unwrap();
        let b = parse(quote! { k; mass = 1, time = -2 }).unwrap();
        assert_eq!(a.exponents, b.exponents);
    }

    #[test]
    fn test_parse_empty_is_dimensionless() {
        let input = parse(quote! { k; }).unwrap();
        assert_eq!(input.exponents, [0; 7]);
    }

    #[test]
    fn test_parse_trailing_comma() {
        let input = parse(quote! { k; length = 3, }).unwrap();
        assert_eq!(input.exponents, [0, 3, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_multi_segment_crate_path() {
        let input = parse(quote! { ::dimq::core; mass = 1 }).unwrap();
        let path = input.krate.to_string();
        assert!(path.contains("dimq"));
        assert!(path.contains("core"));
    }

    #[test]
    fn test_parse_unknown_axis() {
        let err = parse(quote! { k; lenght = 1 }).err().unwrap();
        assert!(err.to_string().contains("unknown dimension `lenght`"));
    }

    #[test]
    fn test_parse_duplicate_axis() {
        let err = parse(quote! { k; time = 1, time = 2 }).err().unwrap();
        assert!(err.to_string().contains("duplicate dimension `time`"));
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = parse(quote! { k; mass = 65 }).err().unwrap();
        assert!(err.to_string().contains("exponent out of range"));
        assert!(parse(quote! { k; mass = -64 }).is_ok());
    }

    #[test]
    fn test_parse_non_integer() {
        assert!(parse(quote! { k; mass = 1.5 }).is_err());
        assert!(parse(quote! { k; mass = x }).is_err());
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = parse(quote! { k; mass = 1 time = 2 }).err().unwrap();
        assert!(err.to_string().contains("expected `,`"));
    }

    #[test]
    fn test_parse_missing_crate_path() {
        assert!(parse(quote! { mass = 1 }).is_err());
        assert!(parse(quote! { ; mass = 1 }).is_err());
    }

    #[test]
    fn test_dim_type_impl_expansion() {
        let input = parse(quote! { dimq_core; mass = 1, length = 2, time = -2 }).unwrap();
        let code = dim_type_impl(input).unwrap().to_string();
        assert!(code.starts_with("dimq_core :: Dim <"));
        assert!(code.contains("dimq_core :: typenum :: consts :: P1"));
        assert!(code.contains("dimq_core :: typenum :: consts :: P2"));
        assert!(code.contains("dimq_core :: typenum :: consts :: N2"));
        assert_eq!(code.matches("Z0").count(), 4);
    }

    #[test]
    fn test_exponent_ident() {
        assert_eq!(exponent_ident(0).to_string(), "Z0");
        assert_eq!(exponent_ident(12).to_string(), "P12");
        assert_eq!(exponent_ident(-3).to_string(), "N3");
        assert_eq!(exponent_ident(MAX_EXPONENT).to_string(), "P64");
        assert_eq!(exponent_ident(-MAX_EXPONENT).to_string(), "N64");
    }

    #[test]
    fn test_dim_type_impl_extreme_exponents() {
        let input = parse(quote! { dimq_core; mass = -64, amount = 64 }).unwrap();
        let code = dim_type_impl(input).unwrap().to_string();
        assert!(code.contains("consts :: N64"));
        assert!(code.contains("consts :: P64"));
    }
}
