//! Lexical environments.
//!
//! An `Environment` is one scope frame: a name-to-value map plus an
//! optional link to the enclosing frame. Lookup walks the chain outward;
//! binding always writes the innermost frame. Frames are shared through
//! `Rc<RefCell<_>>` because a function value captures its definition-site
//! frame and may outlive the call that created it - the chain is a DAG of
//! upward references, never a tree owned top-down.
//!
//! The chain is acyclic by construction: `outer` is fixed when a frame is
//! created and never reassigned.

use std::cell::RefCell;
use std::rc::Rc;

use tarn_util::FxHashMap;

use crate::value::Value;

/// One scope frame in the environment chain.
#[derive(Debug, Default)]
pub struct Environment {
    /// Bindings in this frame
    store: FxHashMap<String, Value>,

    /// Enclosing frame, if any
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty root environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame enclosed by `outer`.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Self {
            store: FxHashMap::default(),
            outer: Some(outer),
        }
    }

    /// Wraps an environment for shared ownership.
    pub fn shared(self) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(self))
    }

    /// Looks up a name, walking the chain innermost-outward.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self
                .outer
                .as_ref()
                .and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame, unconditionally.
    ///
    /// Outer frames are never written through; a binding in an inner frame
    /// shadows any outer one.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
