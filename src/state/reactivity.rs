// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Subscribers {
    next_id: Cell<usize>,
    listeners: RefCell<Vec<(usize, Listener)>>,
}

/// Handle de suscripción; al hacer drop se da de baja
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: usize,
    owner: Weak<Subscribers>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(owner) = self.owner.upgrade() {
            owner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: RefCell<T>,
    subscribers: Rc<Subscribers>,
}

impl<T: Clone> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: Rc::new(Subscribers::default()),
        }
    }

    /// Snapshot del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.subscribers.next_id.get();
        self.subscribers.next_id.set(id + 1);
        self.subscribers
            .listeners
            .borrow_mut()
            .push((id, Rc::new(callback)));
        Subscription {
            id,
            owner: Rc::downgrade(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.listeners.borrow().len()
    }

    // Se copia la lista antes de llamar: un listener puede suscribirse,
    // darse de baja o leer el valor sin chocar con el RefCell.
    fn notify(&self) {
        let listeners: Vec<Listener> = self
            .subscribers
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}
