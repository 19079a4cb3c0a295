use std::{cell::RefCell, collections::HashMap, rc::Rc};

use log::debug;

use crate::types::Value;

#[derive(Debug, Default)]
pub struct Env {
    values: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Env>>>,
}

impl Env {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn with_parent(parent: Rc<RefCell<Env>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            parent: Some(parent),
            ..Default::default()
        }))
    }

    /// Binds in this scope only. Same-named bindings in
    /// enclosing scopes are shadowed, never overwritten.
    pub fn set(&mut self, name: &str, value: Value) {
        debug!("Set {name} -> {value}");
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        debug!("Get {name}");
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            debug!("Get {name} from parent");
            return parent.borrow().get(name);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_walks_parents() {
        let global = Env::new();
        global.borrow_mut().set("x", Value::Integer(1));
        let local = Env::with_parent(Rc::clone(&global));
        let inner = Env::with_parent(Rc::clone(&local));
        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
        assert_eq!(inner.borrow().get("y"), None);
    }

    #[test]
    fn set_shadows_parent() {
        let global = Env::new();
        global.borrow_mut().set("x", Value::Integer(1));
        let local = Env::with_parent(Rc::clone(&global));
        local.borrow_mut().set("x", Value::Integer(2));
        assert_eq!(local.borrow().get("x"), Some(Value::Integer(2)));
        assert_eq!(global.borrow().get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn parent_is_shared() {
        let global = Env::new();
        let local = Env::with_parent(Rc::clone(&global));
        global.borrow_mut().set("x", Value::Integer(3));
        assert_eq!(local.borrow().get("x"), Some(Value::Integer(3)));
    }
}
