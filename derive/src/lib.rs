//! This crate contains macros to materialize ranged integer types as part of
//! the ranged engine.
//!
//! This crate should not be imported directly, (it will not work) rather the
//! macros should be accessed through the
//! [`ranged_engine`](https://crates.io/crates/ranged_engine) crate.

#![deny(missing_docs)]
use int_kind::IntKind;
use proc_macro2::{Ident, Span};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, LitInt, Token,
};

/// Macro to materialize a ranged integer type. To materialize a type, a name
/// and a pair of inclusive bounds are required, for example:
///
/// ```ignore
/// // Note: this is just a syntax example, this macro needs to be called
/// // from the [`ranged_engine`](https://crates.io/crates/ranged_engine) crate.
///
/// create_ranged_int! {
///     name: Percent,
///     min: 0,
///     max: 100,
/// }
/// ```
///
/// The name is required to be some unique identifier which is not defined
/// anywhere elsewhere in the scope. The bounds may be any integers with
/// `min <= max`, as long as some native integer kind up to 32 bits can hold
/// both: a negative `min` selects the narrowest fitting signed kind, a
/// non-negative `min` the narrowest fitting unsigned kind.
///
/// The macro will generate a type with the given name backed by the selected
/// kind. Bounds which are empty or which no kind can hold are rejected with
/// a compile error at the macro call site.
#[proc_macro]
pub fn create_ranged_int(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Generate documentation
    let input_string = input.to_string();
    let mut documentation = quote! {
        #[doc = "Ranged integer type materialized from bounds:"]
        #[doc = ""]
    };

    for line in input_string.lines() {
        let line = format!(
            "```rust
        {{
        {line}
        }}
        ```"
        );
        documentation.extend(quote!(#[doc = #line]));
    }

    // Parse ranged type description
    let desc = parse_macro_input!(input as RangedIntDescription);
    let name = Ident::new(&desc.name, Span::mixed_site());

    // Materialize storage selection
    let kind = match IntKind::select(desc.min, desc.max) {
        Some(kind) => kind,
        None => {
            let message = if desc.min > desc.max {
                format!("empty range: min {} exceeds max {}", desc.min, desc.max)
            } else {
                format!(
                    "no native integer kind up to 32 bits can represent {}..={}",
                    desc.min, desc.max
                )
            };
            return syn::Error::new(Span::call_site(), message)
                .to_compile_error()
                .into();
        }
    };

    let storage = Ident::new(kind.name(), Span::call_site());
    let min = desc.min;
    let max = desc.max;

    let alias = quote! {
        #documentation
        pub type #name = ::ranged_engine::private::Ranged<#storage, #min, #max>;
    };

    alias.into()
}

struct RangedIntDescription {
    name: String,
    min: i128,
    max: i128,
}

impl Parse for RangedIntDescription {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        assert!(name.to_string() == "name".to_string(), "missing name!");

        let _: Token![:] = input.parse()?;
        let type_name: Ident = input.parse()?;
        let _: Token![,] = input.parse()?;

        let min = parse_bound(input, "min")?;
        let _: Token![,] = input.parse()?;
        let max = parse_bound(input, "max")?;
        let _: Option<Token![,]> = input.parse()?;

        Ok(Self {
            name: type_name.to_string(),
            min,
            max,
        })
    }
}

fn parse_bound(input: ParseStream, expected: &str) -> syn::Result<i128> {
    let key: Ident = input.parse()?;
    if key != expected {
        return Err(syn::Error::new(
            key.span(),
            format!("expected `{}`", expected),
        ));
    }

    let _: Token![:] = input.parse()?;
    let negative: Option<Token![-]> = input.parse()?;
    let literal: LitInt = input.parse()?;
    let magnitude: i128 = literal.base10_parse()?;

    Ok(if negative.is_some() {
        -magnitude
    } else {
        magnitude
    })
}
