pub mod controller;
pub mod controllers;
pub mod dto;
pub mod error;
pub mod http;
