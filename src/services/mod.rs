pub mod emt_client;
