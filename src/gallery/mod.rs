pub mod controller;
pub mod notifications;
pub mod repository;
