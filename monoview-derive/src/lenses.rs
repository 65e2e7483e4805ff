//! Expansion of `#[derive(Lenses)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            expand_struct(&input.ident, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs with named fields, not enums",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn expand_struct(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    let named = match fields {
        Fields::Named(named) => &named.named,
        Fields::Unnamed(_) => {
            return syn::Error::new_spanned(
                name,
                "Lenses can only be derived for structs with named fields, not tuple structs",
            )
            .to_compile_error();
        }
        Fields::Unit => {
            return syn::Error::new_spanned(name, "Lenses cannot be derived for unit structs")
                .to_compile_error();
        }
    };

    let accessors = named.iter().filter_map(lens_accessor);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#accessors)*
        }
    }
}

fn lens_accessor(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_lens", field_name);
    let doc = format!("Returns a lens focusing on the `{field_name}` field.");

    Some(quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::monoview::optics::Lens<Self, #field_type> + Clone {
            ::monoview::optics::FunctionLens::new(
                |source: &Self| &source.#field_name,
                |mut source: Self, value: #field_type| {
                    source.#field_name = value;
                    source
                },
            )
        }
    })
}
