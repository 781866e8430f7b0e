use crate::util::{type_param_bounds, where_clause_with_bounds};
use darling::{FromDeriveInput, FromField, FromMeta, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Attribute, DeriveInput, Error, Expr, Generics, Ident, LitStr, Type, ext::IdentExt};

// derive_model
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let model = match ModelInput::from_derive_input(&input) {
        Ok(model) => model,
        Err(err) => return err.write_errors(),
    };

    model.expand().unwrap_or_else(|err| err.to_compile_error())
}

///
/// ModelInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(mapping), supports(struct_named, enum_unit))]
struct ModelInput {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, FieldInput>,

    #[darling(default)]
    name: Option<String>,

    #[darling(default)]
    repr: Option<EnumRepr>,
}

impl ModelInput {
    fn expand(&self) -> Result<TokenStream, Error> {
        if let Some(lifetime) = self.generics.lifetimes().next() {
            return Err(Error::new_spanned(
                lifetime,
                "Model cannot be derived for types with lifetime parameters",
            ));
        }

        match &self.data {
            Data::Struct(fields) => {
                if self.repr.is_some() {
                    return Err(Error::new_spanned(
                        &self.ident,
                        "`repr` only applies to enums",
                    ));
                }

                self.expand_struct(&fields.fields)
            }
            Data::Enum(_) => Ok(self.expand_enum()),
        }
    }

    fn model_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.ident.unraw().to_string())
    }

    fn expand_struct(&self, fields: &[FieldInput]) -> Result<TokenStream, Error> {
        let ident = &self.ident;
        let name = self.model_name();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let where_clause =
            where_clause_with_bounds(where_clause, &type_param_bounds(&self.generics));

        let mut declared = Vec::with_capacity(fields.len());
        for field in fields {
            if let Some(tokens) = field.declared_field()? {
                declared.push(tokens);
            }
        }

        Ok(quote! {
            impl #impl_generics ::docmap::core::traits::Model for #ident #ty_generics #where_clause {
                const NAME: &'static str = #name;

                fn fields() -> ::std::vec::Vec<::docmap::core::model::DeclaredField> {
                    ::std::vec![#(#declared),*]
                }
            }

            impl #impl_generics ::docmap::core::traits::FieldType for #ident #ty_generics #where_clause {
                fn type_expr() -> ::docmap::core::model::TypeExpr {
                    ::docmap::core::model::TypeExpr::model::<Self>()
                }
            }
        })
    }

    fn expand_enum(&self) -> TokenStream {
        let ident = &self.ident;
        let name = self.model_name();
        let repr = self.repr.unwrap_or_default();
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        quote! {
            impl #impl_generics ::docmap::core::traits::FieldType for #ident #ty_generics #where_clause {
                fn type_expr() -> ::docmap::core::model::TypeExpr {
                    ::docmap::core::model::TypeExpr::enumeration(#name, #repr)
                }
            }
        }
    }
}

///
/// FieldInput
///

#[derive(FromField)]
#[darling(forward_attrs(mapping))]
struct FieldInput {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,
}

impl FieldInput {
    // declared_field
    // None when the field is skipped
    fn declared_field(&self) -> Result<Option<TokenStream>, Error> {
        let Some(ident) = &self.ident else {
            return Err(Error::new_spanned(&self.ty, "expected a named field"));
        };

        let mapping = FieldMapping::parse(&self.attrs)?;
        if mapping.skip {
            return Ok(None);
        }

        let ty = &self.ty;
        let name = mapping
            .rename
            .map_or_else(|| ident.unraw().to_string(), |lit| lit.value());

        let sources = mapping.sources.iter().map(|source| {
            let entries = source.iter().map(|(key, value)| quote!(.with(#key, #value)));

            quote! {
                .with_attributes(::docmap::core::model::Attributes::new() #(#entries)*)
            }
        });

        // opaque fields declare their type by spelling, so the Rust type
        // needs no FieldType impl
        let declared = if mapping.opaque {
            let spelling = ty.to_token_stream().to_string().replace(' ', "");

            quote! {
                ::docmap::core::model::DeclaredField::new(
                    #name,
                    ::docmap::core::model::TypeExpr::named(#spelling),
                )
            }
        } else {
            quote!(::docmap::core::model::DeclaredField::of::<#ty>(#name))
        };

        Ok(Some(quote!(#declared #(#sources)*)))
    }
}

///
/// FieldMapping
/// Parsed `#[mapping(...)]` attributes of one field. Each attribute is one
/// ordered attribute source.
///

#[derive(Default)]
struct FieldMapping {
    skip: bool,
    opaque: bool,
    rename: Option<LitStr>,
    sources: Vec<Vec<(String, Expr)>>,
}

impl FieldMapping {
    fn parse(attrs: &[Attribute]) -> Result<Self, Error> {
        let mut mapping = Self::default();

        for attr in attrs {
            let mut source = Vec::new();

            attr.parse_nested_meta(|meta| {
                let Some(key) = meta.path.get_ident().map(|ident| ident.unraw().to_string())
                else {
                    return Err(meta.error("expected a single identifier key"));
                };

                match key.as_str() {
                    "skip" => mapping.skip = true,
                    "opaque" => mapping.opaque = true,
                    "rename" => mapping.rename = Some(meta.value()?.parse()?),
                    _ => {
                        let value: Expr = meta.value()?.parse()?;
                        source.push((key, value));
                    }
                }

                Ok(())
            })?;

            if !source.is_empty() {
                mapping.sources.push(source);
            }
        }

        Ok(mapping)
    }
}

///
/// EnumRepr
///

#[derive(Clone, Copy, Debug, Default)]
enum EnumRepr {
    #[default]
    Text,
    Integer,
}

impl FromMeta for EnumRepr {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        match s {
            "text" => Ok(Self::Text),
            "integer" => Ok(Self::Integer),
            _ => Err(darling::Error::unknown_value(s)),
        }
    }
}

impl ToTokens for EnumRepr {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let primitive = match self {
            Self::Text => quote!(Text),
            Self::Integer => quote!(Integer),
        };

        tokens.extend(quote!(::docmap::core::types::Primitive::#primitive));
    }
}
