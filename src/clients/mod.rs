pub mod cocktaildb;
