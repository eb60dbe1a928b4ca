// handlers/mod.rs - Route handlers
//
// companies: CRUD over the company table (/api/companies[/:companyId])
// lookups:   read-only lists (/api/items, /api/studenttitles)
// system:    service descriptor and health probe (/, /health)

pub mod companies;
pub mod lookups;
pub mod system;

pub use companies::*;
pub use lookups::{item_list, student_title_list};
pub use system::{health, root};
