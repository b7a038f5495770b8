//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// The variants map onto the CRUD operations every console resource supports, plus
/// `List` (the "get all" query the screens refresh from) and `Action` for
/// resource-specific operations that don't fit CRUD.
///
/// - **Create**: builds a resource from [`ActorEntity::Create`].
/// - **Get**: fetches one resource by id.
/// - **List**: fetches every resource in creation order.
/// - **Update**: applies [`ActorEntity::Update`] to an existing resource.
/// - **Delete**: removes a resource.
/// - **Action**: runs an [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
