use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Generics, Ident, Type};

///
/// Target
///
/// The tuple struct being turned into a strong type: its name, the single
/// stored representation, and its generics.
///

pub struct Target {
    pub ident: Ident,
    pub inner: Type,
    pub generics: Generics,
}

impl Target {
    pub fn parse(input: &DeriveInput) -> Result<Self, Error> {
        let message = "StrongType can only be derived for tuple structs with a single field";

        let inner = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                    fields.unnamed[0].ty.clone()
                }
                _ => return Err(Error::new_spanned(&data.fields, message)),
            },
            _ => return Err(Error::new_spanned(&input.ident, message)),
        };

        Ok(Self {
            ident: input.ident.clone(),
            inner,
            generics: input.generics.clone(),
        })
    }

    /// `Name<..>` as written in impl headers.
    pub fn self_ty(&self) -> TokenStream {
        let ident = &self.ident;
        let (_, ty_generics, _) = self.generics.split_for_impl();

        quote!(#ident #ty_generics)
    }

    pub fn impl_generics(&self) -> TokenStream {
        let (impl_generics, _, _) = self.generics.split_for_impl();

        quote!(#impl_generics)
    }

    /// The target's own where clause extended with `bounds`.
    pub fn where_clause(&self, bounds: &[TokenStream]) -> TokenStream {
        let preds = self
            .generics
            .where_clause
            .iter()
            .flat_map(|wc| wc.predicates.iter());

        if bounds.is_empty() && self.generics.where_clause.is_none() {
            return quote!();
        }

        quote!(where #(#preds,)* #(#bounds),*)
    }
}

///
/// TESTS
///
