use convert_case::{Case, Casing};
use syn::{Attribute, Ident, LitStr, ext::IdentExt};

///
/// MapAttrs
/// Parsed `#[map(...)]` options for one field or variant.
///

#[derive(Default)]
pub struct MapAttrs {
    pub name: Option<LitStr>,
    pub supertype: Option<LitStr>,
}

// parse_map_attrs
pub fn parse_map_attrs(attrs: &[Attribute]) -> syn::Result<MapAttrs> {
    let mut out = MapAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("map")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("map name must not be empty"));
                }
                out.name = Some(lit);
                Ok(())
            } else if meta.path.is_ident("supertype") {
                out.supertype = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported map attribute; expected `name` or `supertype`"))
            }
        })?;
    }

    Ok(out)
}

/// Property name for a field: the explicit override, or the UpperCamel
/// form of the identifier.
pub fn property_name(ident: &Ident, attrs: &MapAttrs) -> String {
    attrs
        .name
        .as_ref()
        .map_or_else(|| ident.unraw().to_string().to_case(Case::Pascal), LitStr::value)
}
