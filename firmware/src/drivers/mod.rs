//! Peripheral driver registry.
//!
//! Each driver lives in a `static` cell guarded by a critical section and is
//! handed out as a cheap copyable [`DriverHandle`]. The `init_*` constructor
//! of each submodule refuses to run twice.

use core::{cell::RefCell, marker::PhantomData};

use critical_section::Mutex;

pub type DriverCell<T> = Mutex<RefCell<Option<T>>>;

#[derive(Debug)]
pub enum DriverError {
    AlreadyInitialized,
    NotReady,
    InitFailed(&'static str),
}

#[derive(Clone, Copy)]
pub struct DriverHandle<T: 'static> {
    cell: &'static DriverCell<T>,
    _marker: PhantomData<T>,
}

impl<T: 'static> DriverHandle<T> {
    pub const fn new(cell: &'static DriverCell<T>) -> Self {
        Self {
            cell,
            _marker: PhantomData,
        }
    }

    /// Run `f` on the driver if it is initialized.
    pub fn try_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.cell.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Move the driver out of the cell, leaving it uninitialized.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.cell.borrow_ref_mut(cs).take())
    }

    /// Put a driver back into the cell.
    pub fn replace(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.cell.borrow_ref_mut(cs).replace(value))
    }
}

pub mod exio;
pub mod i2c;
