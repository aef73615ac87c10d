use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a three component color model from a struct definition.
///
/// Every field must carry a `#[max = ...]` attribute holding the upper bound
/// the constructor clamps the component to. Fields are made private and get
/// a read only accessor carrying the field's docs.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(mut input: syn::ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    if !matches!(input.fields, syn::Fields::Named(_)) || input.fields.len() != 3 {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Models must have exactly 3 fields, one for each component of the color.",
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Models can not be generic.",
        ));
    }

    let mut field_names = vec![];
    let mut field_docs = vec![];
    let mut upper_bounds = vec![];

    for field in input.fields.iter_mut() {
        let mut upper_bound = None;
        field.attrs.retain(|attr| {
            if !attr.path().is_ident("max") {
                return true;
            }
            if let syn::Meta::NameValue(ref name_value) = attr.meta {
                upper_bound = Some(name_value.value.clone());
            }
            false
        });

        let Some(upper_bound) = upper_bound else {
            return Err(syn::Error::new_spanned(
                field,
                "Model components need an upper bound, e.g. `#[max = 1.0]`.",
            ));
        };

        field.vis = syn::Visibility::Inherited;

        field_names.push(field.ident.clone());
        field_docs.push(
            field
                .attrs
                .iter()
                .filter(|attr| attr.path().is_ident("doc"))
                .cloned()
                .collect::<Vec<_>>(),
        );
        upper_bounds.push(upper_bound);
    }

    let attr = syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
    })?;
    input.attrs.extend(attr);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model. Components above their upper
            /// bound are clamped to it, lower values are kept as given.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #(#field_names: crate::math::clamp_upper(#field_names, #upper_bounds),)*
                }
            }

            #(
                #(#field_docs)*
                #[inline]
                pub fn #field_names(&self) -> crate::color::Component {
                    self.#field_names
                }
            )*

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }

        impl std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} {} {}", self.#field1, self.#field2, self.#field3)
            }
        }

        impl std::str::FromStr for #struct_name {
            type Err = crate::error::ParseColorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let [#field1, #field2, #field3] = crate::parse::components::<crate::color::Component, 3>(s)?;
                Ok(Self::new(#field1, #field2, #field3))
            }
        }
    };

    Ok(quote! {
        #input
        #new_impl
    })
}
