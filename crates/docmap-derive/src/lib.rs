use proc_macro::TokenStream;

mod model;
mod util;

/// Implement `Model` and `FieldType` for a struct with named fields, or
/// `FieldType` for a unit-only enum.
///
/// ```ignore
/// #[derive(Model)]
/// #[mapping(name = "Article")]
/// struct Post {
///     #[mapping(type = "text", analyzer = "english")]
///     body: String,
///
///     #[mapping(rename = "published")]
///     published_at: chrono::NaiveDate,
///
///     #[mapping(skip)]
///     draft: bool,
///
///     // no FieldType impl needed; the override supplies the type
///     #[mapping(opaque, type = "ip")]
///     origin: std::net::IpAddr,
/// }
/// ```
#[proc_macro_derive(Model, attributes(mapping))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive_model(input.into()).into()
}
