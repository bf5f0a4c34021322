use crate::{
    cache::InstanceCache,
    errors::ConstructError,
    resolver::Resolver,
    types::{DynError, Injectable, Instance, TypeInfo},
};

/// A function producing exactly one value from zero or more resolved parameters
///
/// Implemented for every `FnOnce(P1, ..., Pn) -> T` with up to 12 parameters where each
/// parameter is a [Resolver], usually `Arc<Dependency>`.
/// `Params` only disambiguates the implementations per arity and is inferred.
pub trait Constructor<Params>: Send + 'static {
    type Product: Injectable;

    /// Returns the typeinfo about the constructor's produced type
    fn product() -> TypeInfo {
        TypeInfo::of::<Self::Product>()
    }

    /// The types this constructor depends on, in parameter order
    fn parameters() -> Vec<TypeInfo>;

    /// Resolves all parameters from the cache and invokes the constructor
    fn construct(self, cache: &InstanceCache) -> Result<Self::Product, ConstructError>;
}

/// Like [Constructor], for functions returning `Result<T, E>`
///
/// The provided type is `T`, an `Err` fails the build with the error carried verbatim.
pub trait FallibleConstructor<Params>: Send + 'static {
    type Product: Injectable;

    fn product() -> TypeInfo {
        TypeInfo::of::<Self::Product>()
    }

    fn parameters() -> Vec<TypeInfo>;

    fn construct(self, cache: &InstanceCache) -> Result<Self::Product, ConstructError>;
}

/// Type erased constructor, invoked at most once
pub(crate) type BoxedConstructor =
    Box<dyn FnOnce(&InstanceCache) -> Result<Instance, ConstructError> + Send>;

pub(crate) fn erase<Params: 'static, C: Constructor<Params>>(constructor: C) -> BoxedConstructor {
    Box::new(move |cache: &InstanceCache| {
        <C as Constructor<Params>>::construct(constructor, cache).map(Instance::new)
    })
}

pub(crate) fn erase_fallible<Params: 'static, C: FallibleConstructor<Params>>(
    constructor: C,
) -> BoxedConstructor {
    Box::new(move |cache: &InstanceCache| {
        <C as FallibleConstructor<Params>>::construct(constructor, cache).map(Instance::new)
    })
}

macro_rules! impl_constructor {
    ($($param:ident,)*) => {
        impl<F, R, $($param),*> Constructor<($($param,)*)> for F
        where
            F: FnOnce($($param),*) -> R + Send + 'static,
            R: Injectable,
            $($param: Resolver),*
        {
            type Product = R;

            fn parameters() -> Vec<TypeInfo> {
                vec![$($param::dependency()),*]
            }

            #[allow(non_snake_case, unused_variables)]
            fn construct(self, cache: &InstanceCache) -> Result<R, ConstructError> {
                $(let $param = $param::resolve(cache)?;)*
                Ok(self($($param),*))
            }
        }

        impl<F, R, E, $($param),*> FallibleConstructor<($($param,)*)> for F
        where
            F: FnOnce($($param),*) -> Result<R, E> + Send + 'static,
            R: Injectable,
            E: Into<DynError>,
            $($param: Resolver),*
        {
            type Product = R;

            fn parameters() -> Vec<TypeInfo> {
                vec![$($param::dependency()),*]
            }

            #[allow(non_snake_case, unused_variables)]
            fn construct(self, cache: &InstanceCache) -> Result<R, ConstructError> {
                $(let $param = $param::resolve(cache)?;)*
                self($($param),*).map_err(|e| ConstructError::Failed(e.into()))
            }
        }
    };
}

// Constructors with 0 to 12 parameters
macro_rules! impl_constructors {
    ($head:ident, $($tail:ident,)*) => {
        impl_constructor!($head, $($tail,)*);

        // Recursively call the macro for the remaining arities
        impl_constructors!($($tail,)*);
    };
    () => {
        impl_constructor!();
    };
}

impl_constructors!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11, P12,);
