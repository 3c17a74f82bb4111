//! FormSchema derive macro implementation

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::Generics;
use syn::parse_macro_input;
use syn::parse_quote;

use crate::field_attrs::FieldSpec;

/// Implementation of the FormSchema derive macro
pub fn derive_form_schema_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            struct_name,
            "FormSchema can only be derived for structs",
        ));
    };

    let Fields::Named(named) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            struct_name,
            "FormSchema can only be derived for structs with named fields",
        ));
    };

    let specs = named
        .named
        .iter()
        .map(FieldSpec::from_field)
        .collect::<syn::Result<Vec<_>>>()?;

    let field_descriptors = specs
        .iter()
        .filter(|spec| !spec.skip)
        .map(field_descriptor);

    let generics = add_trait_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::alpaca_form_schema::Record for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::alpaca_form_schema::Field<'_>> {
                ::std::vec![
                    #(#field_descriptors,)*
                ]
            }
        }
    })
}

fn field_descriptor(spec: &FieldSpec) -> TokenStream2 {
    let ident = &spec.ident;
    let name = &spec.name;
    let annotation = optional_str(spec.annotation.as_deref());
    let title = optional_str(spec.title.as_deref());

    quote! {
        ::alpaca_form_schema::Field {
            name:       #name,
            annotation: #annotation,
            title:      #title,
            value:      ::alpaca_form_schema::ToFieldValue::to_field_value(&self.#ident),
        }
    }
}

fn optional_str(value: Option<&str>) -> TokenStream2 {
    value.map_or_else(
        || quote! { ::core::option::Option::None },
        |s| quote! { ::core::option::Option::Some(#s) },
    )
}

/// Every type parameter must convert to a field value
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param
            .bounds
            .push(parse_quote!(::alpaca_form_schema::ToFieldValue));
    }
    generics
}
