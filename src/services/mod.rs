pub mod loader;
pub mod supabase;
