//! Requests carried over an actor's mailbox.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Reply channel attached to every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// One operation on the collection an actor owns.
///
/// Payload types come from the entity's associated types, so a request built for
/// one entity cannot reach another entity's actor.
///
/// | Variant  | Payload                 | Reply       |
/// |----------|-------------------------|-------------|
/// | `Create` | [`ActorEntity::Create`] | stored `T`  |
/// | `Update` | id + [`ActorEntity::Update`] | merged `T` |
/// | `List`   | [`ActorEntity::Query`]  | `Vec<T>` copy, insertion order |
///
/// Records are never removed while the actor runs.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
