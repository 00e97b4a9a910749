pub mod chickenpox;
pub mod measles;
pub mod monkeypox;
pub mod normal;
