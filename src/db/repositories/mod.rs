pub mod search_cache;
