// handlers/companies/mod.rs - Company CRUD handlers
//
// Every handler has the same shape: validate, run one store call, shape JSON.
// The store owns connection acquisition and release.

pub mod create;   // POST /api/companies
pub mod delete;   // DELETE /api/companies/:company_id
pub mod list;     // GET /api/companies
pub mod update;   // PATCH /api/companies/:company_id
pub mod upsert;   // PUT /api/companies/:company_id

pub use create::company_create;
pub use delete::company_delete;
pub use list::company_list;
pub use update::company_update;
pub use upsert::company_upsert;
