use crate::util::parse_map_attrs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Expr, ExprLit, ExprUnary, Fields, Lit, UnOp};

// derive_map_enum
pub fn derive_map_enum(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let ident_str = ident.to_string();

    if !input.generics.params.is_empty() {
        let err = Error::new_spanned(&input.generics, "MapEnum cannot be derived for generic types");
        return err.to_compile_error();
    }

    let Data::Enum(data) = &input.data else {
        let err = Error::new_spanned(&input.ident, "MapEnum can only be derived for enums");
        return err.to_compile_error();
    };

    let mut members = Vec::with_capacity(data.variants.len());
    let mut name_arms = Vec::with_capacity(data.variants.len());
    let mut lookup_arms = Vec::with_capacity(data.variants.len());
    let mut next_discriminant: i64 = 0;

    for variant in &data.variants {
        let variant_ident = &variant.ident;

        if !matches!(variant.fields, Fields::Unit) {
            let err = Error::new_spanned(variant, "MapEnum variants must be fieldless");
            return err.to_compile_error();
        }

        let attrs = match parse_map_attrs(&variant.attrs) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error(),
        };
        let name = attrs
            .name
            .map_or_else(|| variant_ident.to_string(), |lit| lit.value());

        let discriminant = match &variant.discriminant {
            Some((_, expr)) => match literal_discriminant(expr) {
                Ok(d) => d,
                Err(err) => return err.to_compile_error(),
            },
            None => next_discriminant,
        };
        next_discriminant = discriminant.wrapping_add(1);

        members.push(quote! {
            ::shapemap::model::EnumVariantModel {
                name: #name,
                discriminant: #discriminant,
            }
        });
        name_arms.push(quote! { Self::#variant_ident => #name, });
        lookup_arms.push(quote! { #name => Some(Self::#variant_ident), });
    }

    quote! {
        impl ::shapemap::traits::MapEnum for #ident {
            const PATH: &'static str = concat!(module_path!(), "::", #ident_str);
            const MEMBERS: &'static [::shapemap::model::EnumVariantModel] = &[#(#members),*];

            fn variant_name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }

            fn from_variant_name(name: &str) -> Option<Self> {
                match name {
                    #(#lookup_arms)*
                    _ => None,
                }
            }
        }

        impl ::shapemap::traits::FieldValue for #ident {
            const TAG: ::shapemap::value::TypeTag = ::shapemap::value::TypeTag::Enum;
            const SUPERTYPE: ::shapemap::model::Supertype = ::shapemap::model::Supertype::Enum;
            const VARIANTS: &'static [::shapemap::model::EnumVariantModel] =
                <Self as ::shapemap::traits::MapEnum>::MEMBERS;

            fn to_value(&self) -> ::shapemap::value::Value {
                use ::shapemap::traits::MapEnum;

                ::shapemap::value::Value::Enum(::shapemap::value::ValueEnum::new(
                    self.variant_name(),
                    Some(<Self as MapEnum>::PATH),
                ))
            }

            fn from_value(value: &::shapemap::value::Value) -> Option<Self> {
                use ::shapemap::traits::MapEnum;

                match value {
                    ::shapemap::value::Value::Enum(v) if v.accepts_path(<Self as MapEnum>::PATH) => {
                        <Self as MapEnum>::from_variant_name(&v.variant)
                    }
                    _ => None,
                }
            }
        }
    }
}

// literal_discriminant
// integer literal, optionally negated
fn literal_discriminant(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => int.base10_parse::<i64>(),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => literal_discriminant(expr).map(|d| -d),
        _ => Err(Error::new_spanned(
            expr,
            "MapEnum discriminants must be integer literals",
        )),
    }
}
