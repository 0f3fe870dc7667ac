//! # Store Messages
//!
//! The request envelope exchanged between [`StoreClient`](crate::StoreClient) and
//! [`RecordActor`](crate::RecordActor).

use crate::entity::RecordEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request to the store. The variants are the record store contract:
///
/// - **Create**: assign the next identifier and insert.
/// - **Get**: look up by identifier.
/// - **Update**: apply a partial update, reply with the new state.
/// - **Delete**: remove, reply with the removed record.
/// - **List**: every live record, ordered by identifier.
#[derive(Debug)]
pub enum StoreRequest<T: RecordEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
