use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

fn compile_error(message: &str) -> proc_macro2::TokenStream {
    quote! {
        compile_error!(#message);
    }
}

/// Generate a color model from a struct with exactly 3 named fields of the
/// same type, one for each component of the color.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return compile_error(
            "Models must have exactly 3 fields, one for each component of the color.",
        )
        .into();
    }

    if !input.generics.params.is_empty() {
        return compile_error("Models can not be generic.").into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    if field_names.iter().any(Option::is_none) {
        return compile_error("Model fields must be named.").into();
    }

    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();

    let ty = &field_types[0];
    let ty_str = quote!(#ty).to_string();
    if field_types
        .iter()
        .any(|t| quote!(#t).to_string() != ty_str)
    {
        return compile_error("All model fields must have the same type.").into();
    }

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color from its 3 components.
            pub const fn new(#field1: #ty, #field2: #ty, #field3: #ty) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the components of this color in declaration order.
            pub const fn to_array(&self) -> [#ty; 3] {
                [self.#field1, self.#field2, self.#field3]
            }

            /// Return a new color with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(#ty) -> #ty) -> Self {
                Self::new(f(self.#field1), f(self.#field2), f(self.#field3))
            }
        }

        impl From<[#ty; 3]> for #struct_name {
            fn from(value: [#ty; 3]) -> Self {
                let [#field1, #field2, #field3] = value;
                Self::new(#field1, #field2, #field3)
            }
        }

        impl From<#struct_name> for [#ty; 3] {
            fn from(value: #struct_name) -> Self {
                value.to_array()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
