use crate::util::{parse_map_attrs, property_name};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields};

// derive_mappable
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let ident_str = ident.to_string();

    if !input.generics.params.is_empty() {
        let err = Error::new_spanned(
            &input.generics,
            "Mappable cannot be derived for generic types",
        );
        return err.to_compile_error();
    }

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "Mappable can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "Mappable can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let mut property_models = Vec::with_capacity(fields.len());
    let mut get_arms = Vec::with_capacity(fields.len());
    let mut set_arms = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let field_ident = field.ident.as_ref().expect("named field");
        let ty = &field.ty;

        let attrs = match parse_map_attrs(&field.attrs) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error(),
        };

        let name = property_name(field_ident, &attrs);
        let type_name = quote!(#ty).to_string().replace(' ', "");
        let supertype = attrs.supertype.as_ref().map_or_else(
            || quote!(<#ty as ::shapemap::traits::FieldValue>::SUPERTYPE),
            |lit| quote!(::shapemap::model::Supertype::Named(#lit)),
        );

        property_models.push(quote! {
            ::shapemap::model::PropertyModel {
                name: #name,
                type_name: #type_name,
                tag: <#ty as ::shapemap::traits::FieldValue>::TAG,
                supertype: #supertype,
                nullable: <#ty as ::shapemap::traits::FieldValue>::NULLABLE,
                variants: <#ty as ::shapemap::traits::FieldValue>::VARIANTS,
            }
        });

        get_arms.push(quote! {
            #index => Some(::shapemap::traits::FieldValue::to_value(&self.#field_ident)),
        });

        set_arms.push(quote! {
            #index => match <#ty as ::shapemap::traits::FieldValue>::from_value(&value) {
                Some(v) => {
                    self.#field_ident = v;
                    Ok(())
                }
                None => Err(::shapemap::error::ConversionError::rejected(
                    &<Self as ::shapemap::traits::Mappable>::MODEL.properties[#index],
                    &value,
                )),
            },
        });
    }

    quote! {
        impl ::shapemap::traits::Mappable for #ident {
            const MODEL: &'static ::shapemap::model::TypeModel = &::shapemap::model::TypeModel {
                path: concat!(module_path!(), "::", #ident_str),
                properties: &[#(#property_models),*],
            };

            fn get_value(&self, index: usize) -> Option<::shapemap::value::Value> {
                match index {
                    #(#get_arms)*
                    _ => None,
                }
            }

            fn set_value(
                &mut self,
                index: usize,
                value: ::shapemap::value::Value,
            ) -> Result<(), ::shapemap::error::ConversionError> {
                match index {
                    #(#set_arms)*
                    _ => Err(::shapemap::error::ConversionError::UnknownProperty { index }),
                }
            }
        }
    }
}
