use crate::{
    newtype::Target,
    skill::{SkillKind, SkillSet},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

// scalar widths wired into the scalar skills
const FLOAT_SCALARS: [&str; 2] = ["f32", "f64"];
const INT_SCALARS: [&str; 3] = ["i32", "u32", "i64"];

///
/// OpSpec
///
/// One operator family: the `std::ops` trait pair, and the generic skill
/// functions the generated impls forward to.
///

struct OpSpec {
    op_trait: &'static str,
    method: &'static str,
    scalar_fn: &'static str,
    symmetric: bool,
}

impl OpSpec {
    const ADD: Self = Self::new("Add", "add", "", false);
    const SUB: Self = Self::new("Sub", "sub", "", false);
    const MUL: Self = Self::new("Mul", "mul", "mul_scalar", true);
    const DIV: Self = Self::new("Div", "div", "div_scalar", false);

    const fn new(
        op_trait: &'static str,
        method: &'static str,
        scalar_fn: &'static str,
        symmetric: bool,
    ) -> Self {
        Self {
            op_trait,
            method,
            scalar_fn,
            symmetric,
        }
    }

    fn op_trait(&self) -> TokenStream {
        let ident = format_ident!("{}", self.op_trait);

        quote!(::std::ops::#ident)
    }

    fn assign_trait(&self) -> TokenStream {
        let ident = format_ident!("{}Assign", self.op_trait);

        quote!(::std::ops::#ident)
    }
}

// same_type
// value and compound forms with `Self` on both sides
fn same_type(target: &Target, spec: &OpSpec) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let op_trait = spec.op_trait();
    let assign_trait = spec.assign_trait();
    let method = format_ident!("{}", spec.method);
    let assign_method = format_ident!("{}_assign", spec.method);

    let value_where = target.where_clause(&[quote!(#inner: #op_trait<Output = #inner>)]);
    let assign_where = target.where_clause(&[quote!(#inner: ::std::clone::Clone + #assign_trait)]);

    quote! {
        impl #impl_generics #op_trait for #self_ty #value_where {
            type Output = Self;

            #[inline]
            fn #method(self, rhs: Self) -> Self::Output {
                ::sturdy::skill::arith::#method(self, rhs)
            }
        }

        impl #impl_generics #assign_trait for #self_ty #assign_where {
            #[inline]
            fn #assign_method(&mut self, rhs: Self) {
                ::sturdy::skill::arith::#assign_method(self, rhs);
            }
        }
    }
}

// scalar
// value and compound forms against each scalar width, plus `scalar op Self`
// when the operator is symmetric
fn scalar(target: &Target, spec: &OpSpec, widths: &[&str]) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let op_trait = spec.op_trait();
    let assign_trait = spec.assign_trait();
    let method = format_ident!("{}", spec.method);
    let assign_method = format_ident!("{}_assign", spec.method);
    let scalar_fn = format_ident!("{}", spec.scalar_fn);
    let scalar_assign_fn = format_ident!("{}_assign", spec.scalar_fn);

    let impls = widths.iter().map(|width| {
        let scalar = format_ident!("{}", width);
        let value_where = target.where_clause(&[quote!(#inner: ::sturdy::repr::Scale<#scalar>)]);
        let assign_where = target.where_clause(&[
            quote!(#inner: ::std::clone::Clone + ::sturdy::repr::Scale<#scalar>),
        ]);

        let reversed = spec.symmetric.then(|| {
            quote! {
                impl #impl_generics #op_trait<#self_ty> for #scalar #value_where {
                    type Output = #self_ty;

                    #[inline]
                    fn #method(self, rhs: #self_ty) -> Self::Output {
                        ::sturdy::skill::scalar::scalar_mul(self, rhs)
                    }
                }
            }
        });

        quote! {
            impl #impl_generics #op_trait<#scalar> for #self_ty #value_where {
                type Output = Self;

                #[inline]
                fn #method(self, rhs: #scalar) -> Self::Output {
                    ::sturdy::skill::scalar::#scalar_fn(self, rhs)
                }
            }

            impl #impl_generics #assign_trait<#scalar> for #self_ty #assign_where {
                #[inline]
                fn #assign_method(&mut self, rhs: #scalar) {
                    ::sturdy::skill::scalar::#scalar_assign_fn(self, rhs);
                }
            }

            #reversed
        }
    });

    quote!(#(#impls)*)
}

// add
// `+`, `+=` and `Sum`
pub fn add(target: &Target) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let ops = same_type(target, &OpSpec::ADD);
    let sum_where = target.where_clause(&[quote!(#inner: ::std::iter::Sum)]);

    quote! {
        #ops

        impl #impl_generics ::std::iter::Sum for #self_ty #sum_where {
            fn sum<I: ::std::iter::Iterator<Item = Self>>(iter: I) -> Self {
                ::sturdy::skill::arith::sum(iter)
            }
        }
    }
}

// sub
// `-`, `-=` and unary `-`
pub fn sub(target: &Target) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let ops = same_type(target, &OpSpec::SUB);
    let neg_where = target.where_clause(&[quote!(#inner: ::std::ops::Neg<Output = #inner>)]);

    quote! {
        #ops

        impl #impl_generics ::std::ops::Neg for #self_ty #neg_where {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                ::sturdy::skill::arith::neg(self)
            }
        }
    }
}

pub fn mul_t(target: &Target) -> TokenStream {
    same_type(target, &OpSpec::MUL)
}

pub fn mul_f(target: &Target) -> TokenStream {
    scalar(target, &OpSpec::MUL, &FLOAT_SCALARS)
}

pub fn mul_i(target: &Target) -> TokenStream {
    scalar(target, &OpSpec::MUL, &INT_SCALARS)
}

pub fn div_t(target: &Target) -> TokenStream {
    same_type(target, &OpSpec::DIV)
}

pub fn div_f(target: &Target) -> TokenStream {
    scalar(target, &OpSpec::DIV, &FLOAT_SCALARS)
}

pub fn div_i(target: &Target) -> TokenStream {
    scalar(target, &OpSpec::DIV, &INT_SCALARS)
}

// eq
// `PartialEq` through the representation's `ReprEq`
pub fn eq(target: &Target) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let where_clause = target.where_clause(&[quote!(#inner: ::sturdy::repr::ReprEq)]);

    quote! {
        #[allow(clippy::partialeq_ne_impl)]
        impl #impl_generics ::std::cmp::PartialEq for #self_ty #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::sturdy::skill::eq::eq(self, other)
            }

            #[inline]
            fn ne(&self, other: &Self) -> bool {
                ::sturdy::skill::eq::ne(self, other)
            }
        }
    }
}

// cmp
// every relation is overridden so all four derive from the skill's `<`
pub fn cmp(target: &Target) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();
    let where_clause = target.where_clause(&[
        quote!(#inner: ::sturdy::repr::ReprEq + ::std::cmp::PartialOrd),
    ]);

    let relations = ["lt", "le", "gt", "ge"].map(|name| {
        let method = format_ident!("{}", name);

        quote! {
            #[inline]
            fn #method(&self, other: &Self) -> bool {
                ::sturdy::skill::cmp::#method(self, other)
            }
        }
    });

    quote! {
        impl #impl_generics ::std::cmp::PartialOrd for #self_ty #where_clause {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::sturdy::skill::cmp::partial_cmp(self, other)
            }

            #(#relations)*
        }
    }
}

///
/// Markers
///
/// Marker trait impls for the resolved skill set. Composite markers need
/// every constituent; their bounds are the union of the constituents'.
///

pub fn markers(target: &Target, skills: &SkillSet) -> TokenStream {
    let inner = &target.inner;
    let self_ty = target.self_ty();
    let impl_generics = target.impl_generics();

    let eq_bounds = vec![quote!(#inner: ::sturdy::repr::ReprEq)];
    let cmp_bounds = vec![quote!(#inner: ::sturdy::repr::ReprEq + ::std::cmp::PartialOrd)];
    let same_type_bounds = |op: &str| {
        let op_trait = format_ident!("{}", op);
        let assign_trait = format_ident!("{}Assign", op);

        vec![
            quote!(#inner: ::std::ops::#op_trait<Output = #inner>),
            quote!(#inner: ::std::clone::Clone + ::std::ops::#assign_trait),
        ]
    };
    let scalar_bounds = |widths: &[&str]| {
        widths
            .iter()
            .map(|width| {
                let scalar = format_ident!("{}", width);
                quote!(#inner: ::std::clone::Clone + ::sturdy::repr::Scale<#scalar>)
            })
            .collect::<Vec<_>>()
    };

    let add_bounds = {
        let mut bounds = same_type_bounds("Add");
        bounds.push(quote!(#inner: ::std::iter::Sum));
        bounds
    };
    let sub_bounds = {
        let mut bounds = same_type_bounds("Sub");
        bounds.push(quote!(#inner: ::std::ops::Neg<Output = #inner>));
        bounds
    };
    let mul_t_bounds = same_type_bounds("Mul");
    let div_t_bounds = same_type_bounds("Div");
    let float_bounds = scalar_bounds(&FLOAT_SCALARS);
    let int_bounds = scalar_bounds(&INT_SCALARS);

    let mul_bounds = [&mul_t_bounds[..], &float_bounds[..], &int_bounds[..]].concat();
    let div_bounds = [&div_t_bounds[..], &float_bounds[..], &int_bounds[..]].concat();
    let math_bounds = [&add_bounds[..], &sub_bounds[..], &mul_bounds[..], &div_bounds[..]].concat();

    let has = |leaf| skills.has(leaf);
    let has_mul = skills.has_all(SkillKind::Mul.leaves());
    let has_div = skills.has_all(SkillKind::Div.leaves());
    let has_math = skills.has_all(SkillKind::Math.leaves());

    let markers = [
        (has(SkillKind::Eq), "Equality", &eq_bounds),
        (has(SkillKind::Cmp), "Comparison", &cmp_bounds),
        (has(SkillKind::Add), "Addition", &add_bounds),
        (has(SkillKind::Sub), "Subtraction", &sub_bounds),
        (has(SkillKind::MulT), "MulByType", &mul_t_bounds),
        (has(SkillKind::MulF), "MulByFloat", &float_bounds),
        (has(SkillKind::MulI), "MulByInt", &int_bounds),
        (has(SkillKind::DivT), "DivByType", &div_t_bounds),
        (has(SkillKind::DivF), "DivByFloat", &float_bounds),
        (has(SkillKind::DivI), "DivByInt", &int_bounds),
        (has_mul, "Multiplication", &mul_bounds),
        (has_div, "Division", &div_bounds),
        (has_math, "Arithmetic", &math_bounds),
    ];

    let impls = markers
        .into_iter()
        .filter(|(present, _, _)| *present)
        .map(|(_, marker, bounds)| {
            let marker = format_ident!("{}", marker);
            let where_clause = target.where_clause(bounds);

            quote! {
                impl #impl_generics ::sturdy::skill::#marker for #self_ty #where_clause {}
            }
        });

    quote!(#(#impls)*)
}
