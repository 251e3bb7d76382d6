use crate::{
    db::{DbPool, OrmConn},
    storage::UploadStore,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub uploads: UploadStore,
}
