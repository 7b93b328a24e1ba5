use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with one named field per component.
///
/// The fields are made public and the struct gets a `const` constructor,
/// conversions to and from a component array, a component-wise `map` and a
/// `Display` implementation in the form `hsl(0, 100, 50)`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not have generic parameters.");
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must have named fields, one for each component of the color.");
        }
        .into();
    };

    if named.named.is_empty() {
        return quote! {
            compile_error!("Models must have at least one component.");
        }
        .into();
    }

    // Make sure the component fields are public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let field_names = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let count = Literal::usize_unsuffixed(field_names.len());

    // Add some derives.
    // TODO: Check if the derives are already there.
    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, Default, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let css_name = struct_name.to_string().to_case(Case::Snake);

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model from its components.
            pub const fn new(#(#field_names: crate::Component),*) -> Self {
                Self {
                    #(#field_names,)*
                }
            }

            /// Return the components of this color in declaration order.
            pub const fn to_array(&self) -> [crate::Component; #count] {
                [#(self.#field_names),*]
            }

            /// Return a new color with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::Component) -> crate::Component) -> Self {
                Self {
                    #(#field_names: f(self.#field_names),)*
                }
            }
        }

        impl From<[crate::Component; #count]> for #struct_name {
            fn from(value: [crate::Component; #count]) -> Self {
                let [#(#field_names),*] = value;
                Self::new(#(#field_names),*)
            }
        }

        impl From<#struct_name> for [crate::Component; #count] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }

        impl ::std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let components = [#(self.#field_names.to_string()),*];
                write!(f, "{}({})", #css_name, components.join(", "))
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
