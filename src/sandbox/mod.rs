mod guard;

pub use guard::PathGuard;
