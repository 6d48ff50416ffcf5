pub mod store;
pub mod supabase;

pub use store::ClinicStore;
pub use supabase::SupabaseClient;
