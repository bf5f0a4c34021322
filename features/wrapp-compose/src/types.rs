use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// Error type returned by fallible constructors
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Anything the container builds and hands out must be shareable.
/// Instances are stored behind an `Arc`, so they need to be Send + Sync + 'static
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// A type-erased instance produced by a provider
///
/// Cloning an `Instance` shares the underlying allocation, every clone points to the same value.
#[derive(Clone)]
pub struct Instance {
    pub info: TypeInfo,
    pub instance: Arc<dyn Any + Send + Sync + 'static>,
}

impl Instance {
    pub fn new<ExistingInstance: Injectable>(instance: ExistingInstance) -> Self {
        Instance {
            info: TypeInfo::of::<ExistingInstance>(),
            instance: Arc::new(instance),
        }
    }

    /// Returns a shared handle to the instance, or the actual type name on mismatch
    pub fn downcast<T: Injectable>(&self) -> Result<Arc<T>, &'static str> {
        match Arc::downcast::<T>(self.instance.clone()) {
            Ok(downcasted) => Ok(downcasted),
            Err(_) => Err(self.info.type_name),
        }
    }

    /// Whether both instances share the same allocation
    pub fn ptr_eq(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl std::fmt::Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Instance").field(&self.info.type_name).finish()
    }
}

/// Type Name and Type Id
///
/// The identity of a type inside the container: graph nodes, providers and
/// cached instances are all keyed by it. Only the `TypeId` decides equality,
/// the name is carried along for error messages and logs.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}
impl Eq for TypeInfo {}
impl std::hash::Hash for TypeInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Whether this is the unit type `()`
    pub fn is_unit(&self) -> bool {
        self.type_id == TypeId::of::<()>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_info_equality_follows_type_id() {
        assert_eq!(TypeInfo::of::<String>(), TypeInfo::of::<String>());
        assert_ne!(TypeInfo::of::<String>(), TypeInfo::of::<&'static str>());
        assert_ne!(TypeInfo::of::<Arc<u8>>(), TypeInfo::of::<u8>());
        assert_eq!(TypeInfo::of::<u8>().to_string(), "u8");
        assert!(TypeInfo::of::<()>().is_unit());
    }

    #[test]
    fn instance_clones_share_allocation() {
        let instance = Instance::new(42_u32);
        let clone = instance.clone();
        assert!(instance.ptr_eq(&clone));
        assert!(!instance.ptr_eq(&Instance::new(42_u32)));

        let a = instance.downcast::<u32>().unwrap();
        let b = clone.downcast::<u32>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, 42);
    }

    #[test]
    fn downcast_mismatch_reports_actual_type() {
        let instance = Instance::new(String::from("x"));
        assert_eq!(
            instance.downcast::<u32>().unwrap_err(),
            std::any::type_name::<String>()
        );
    }
}
