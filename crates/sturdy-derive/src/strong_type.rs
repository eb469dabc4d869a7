use crate::{
    newtype::Target,
    ops,
    options::Options,
    skill::{SkillKind, SkillSet},
};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, GenericParam, parse_quote};

pub fn derive_strong_type(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err,
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, TokenStream> {
    let target = Target::parse(input).map_err(|err| err.to_compile_error())?;
    let options = Options::from_derive_input(input).map_err(|err| err.write_errors())?;
    let skills = SkillSet::resolve(&options.skills).map_err(|err| err.write_errors())?;

    let contract = contract(&target);
    let skill_impls = skill_impls(&target, &skills);
    let display = options.display.is_present().then(|| display(&target));
    let serde = options.serde.is_present().then(|| serde(&target));

    Ok(quote! {
        #contract
        #skill_impls
        #display
        #serde
    })
}

// contract
// the wrapper itself: explicit construction and access, nothing implicit
fn contract(target: &Target) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let where_clause = target.where_clause(&[]);

    quote! {
        impl #impl_generics ::sturdy::strong::StrongType for #self_ty #where_clause {
            type Repr = #inner;

            #[inline]
            fn new(value: #inner) -> Self {
                Self(value)
            }

            #[inline]
            fn get(&self) -> &#inner {
                &self.0
            }

            #[inline]
            fn get_mut(&mut self) -> &mut #inner {
                &mut self.0
            }

            #[inline]
            fn into_inner(self) -> #inner {
                self.0
            }
        }
    }
}

fn skill_impls(target: &Target, skills: &SkillSet) -> TokenStream {
    let generators: [(SkillKind, fn(&Target) -> TokenStream); 10] = [
        (SkillKind::Eq, ops::eq),
        (SkillKind::Cmp, ops::cmp),
        (SkillKind::Add, ops::add),
        (SkillKind::Sub, ops::sub),
        (SkillKind::MulT, ops::mul_t),
        (SkillKind::MulF, ops::mul_f),
        (SkillKind::MulI, ops::mul_i),
        (SkillKind::DivT, ops::div_t),
        (SkillKind::DivF, ops::div_f),
        (SkillKind::DivI, ops::div_i),
    ];

    let impls = generators
        .into_iter()
        .filter(|(kind, _)| skills.has(*kind))
        .map(|(_, generate)| generate(target));
    let markers = ops::markers(target, skills);

    quote! {
        #(#impls)*
        #markers
    }
}

fn display(target: &Target) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let where_clause = target.where_clause(&[quote!(#inner: ::std::fmt::Display)]);

    quote! {
        impl #impl_generics ::std::fmt::Display for #self_ty #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    }
}

// serde
// encoded exactly as the representation; decoding goes back through `new`
fn serde(target: &Target) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let ser_where = target.where_clause(&[
        quote!(#inner: ::sturdy::__reexports::serde::Serialize),
    ]);
    let de_where = target.where_clause(&[
        quote!(#inner: ::sturdy::__reexports::serde::Deserialize<'de>),
    ]);

    let mut de_generics = target.generics.clone();
    de_generics
        .params
        .insert(0, GenericParam::Lifetime(parse_quote!('de)));
    let (de_impl_generics, _, _) = de_generics.split_for_impl();

    quote! {
        impl #impl_generics ::sturdy::__reexports::serde::Serialize for #self_ty #ser_where {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::sturdy::__reexports::serde::Serializer,
            {
                ::sturdy::__reexports::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl #de_impl_generics ::sturdy::__reexports::serde::Deserialize<'de> for #self_ty #de_where {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::sturdy::__reexports::serde::Deserializer<'de>,
            {
                <#inner as ::sturdy::__reexports::serde::Deserialize<'de>>::deserialize(deserializer)
                    .map(<Self as ::sturdy::strong::StrongType>::new)
            }
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: TokenStream) -> String {
        derive_strong_type(input).to_string()
    }

    #[test]
    fn plain_derive_only_emits_contract() {
        let out = expand_str(quote!(struct Label(String);));

        assert!(out.contains("StrongType for Label"));
        assert!(!out.contains("PartialEq"));
        assert!(!out.contains("Serialize"));
    }

    #[test]
    fn cmp_emits_equality_and_ordering() {
        let out = expand_str(quote! {
            #[strong_type(skills(cmp))]
            struct Radian(f64);
        });

        assert!(out.contains("PartialEq for Radian"));
        assert!(out.contains("PartialOrd for Radian"));
        assert!(out.contains("Comparison for Radian"));
        assert!(out.contains("Equality for Radian"));
    }

    #[test]
    fn scalar_division_is_one_sided() {
        let out = expand_str(quote! {
            #[strong_type(skills(div_f, mul_f))]
            struct Radian(f64);
        });

        assert!(out.contains("Div < f64 > for Radian"));
        assert!(out.contains("Mul < Radian > for f64"));
        assert!(!out.contains("Div < Radian > for f64"));
    }

    #[test]
    fn math_emits_composite_markers() {
        let out = expand_str(quote! {
            #[strong_type(skills(math))]
            struct Ticks(i64);
        });

        for marker in [
            "Addition",
            "Subtraction",
            "Multiplication",
            "Division",
            "Arithmetic",
        ] {
            assert!(out.contains(&format!("{marker} for Ticks")), "{marker}");
        }
        assert!(!out.contains("Equality"));
    }

    #[test]
    fn partial_composite_skips_composite_marker() {
        let out = expand_str(quote! {
            #[strong_type(skills(mul_t, mul_f))]
            struct Ticks(i64);
        });

        assert!(out.contains("MulByFloat for Ticks"));
        assert!(!out.contains("Multiplication"));
    }

    #[test]
    fn errors_become_compile_errors() {
        let out = expand_str(quote! {
            #[strong_type(skills(rem))]
            struct Ticks(i64);
        });
        assert!(out.contains("compile_error"));

        let out = expand_str(quote!(struct Pair(i64, i64);));
        assert!(out.contains("compile_error"));
        assert!(!out.contains("StrongType for"));
    }

    #[test]
    fn serde_adds_de_lifetime() {
        let out = expand_str(quote! {
            #[strong_type(serde)]
            struct Wrap<T>(T);
        });

        assert!(out.contains("impl < 'de , T >"));
    }
}
