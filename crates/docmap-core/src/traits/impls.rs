use crate::{model::TypeExpr, traits::FieldType, types::Primitive};
use std::{
    borrow::Cow,
    collections::{BTreeSet, HashSet, LinkedList, VecDeque},
    rc::Rc,
    sync::Arc,
};

// impl_primitive
macro_rules! impl_primitive {
    ($prim:ident => $($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn type_expr() -> TypeExpr {
                    TypeExpr::Primitive(Primitive::$prim)
                }
            }
        )*
    };
}

impl_primitive!(Text => String, str, char, Cow<'_, str>);
impl_primitive!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_primitive!(Float => f32, f64);
impl_primitive!(Bool => bool);

impl_primitive!(DateTime => chrono::NaiveDateTime);
impl_primitive!(Date => chrono::NaiveDate);

impl<Tz: chrono::TimeZone> FieldType for chrono::DateTime<Tz> {
    fn type_expr() -> TypeExpr {
        TypeExpr::Primitive(Primitive::DateTime)
    }
}

//
// wrappers
//

impl<T: FieldType> FieldType for Option<T> {
    fn type_expr() -> TypeExpr {
        TypeExpr::optional(T::type_expr())
    }
}

// impl_list
macro_rules! impl_list {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: FieldType> FieldType for $ty<T> {
                fn type_expr() -> TypeExpr {
                    TypeExpr::list(T::type_expr())
                }
            }
        )*
    };
}

impl_list!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: FieldType, S> FieldType for HashSet<T, S> {
    fn type_expr() -> TypeExpr {
        TypeExpr::list(T::type_expr())
    }
}

impl<T: FieldType> FieldType for [T] {
    fn type_expr() -> TypeExpr {
        TypeExpr::list(T::type_expr())
    }
}

impl<T: FieldType, const N: usize> FieldType for [T; N] {
    fn type_expr() -> TypeExpr {
        TypeExpr::list(T::type_expr())
    }
}

// impl_transparent
// smart pointers and references map exactly like their pointee
macro_rules! impl_transparent {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: FieldType + ?Sized> FieldType for $ty<T> {
                fn type_expr() -> TypeExpr {
                    T::type_expr()
                }
            }
        )*
    };
}

impl_transparent!(Box, Arc, Rc);

impl<T: FieldType + ?Sized> FieldType for &T {
    fn type_expr() -> TypeExpr {
        T::type_expr()
    }
}
