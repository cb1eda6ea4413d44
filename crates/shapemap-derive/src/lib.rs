use proc_macro::TokenStream;

mod map_enum;
mod mappable;
mod util;

/// Derive `Mappable` for a struct with named fields.
///
/// Field attributes:
/// - `#[map(name = "...")]` overrides the property name
/// - `#[map(supertype = "...")]` reports a named supertype
#[proc_macro_derive(Mappable, attributes(map))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    mappable::derive_mappable(input.into()).into()
}

/// Derive `MapEnum` and `FieldValue` for a fieldless enum.
#[proc_macro_derive(MapEnum, attributes(map))]
pub fn derive_map_enum(input: TokenStream) -> TokenStream {
    map_enum::derive_map_enum(input.into()).into()
}
