use hecs::Entity;

/// Invariant violations surfaced while running a physics step.
///
/// In release builds none of these abort a frame. Missing components are
/// programming errors and panic in debug builds; degenerate contacts are
/// expected from time to time and the offending pair is skipped.
#[derive(Debug, thiserror::Error)]
pub enum PhysicsError {
    #[error("entity {entity:?} is missing required component '{component}'")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },

    #[error("mesh handle {handle} does not refer to a loaded mesh")]
    UnknownMesh { handle: usize },

    #[error("contact between {entity:?} and {other:?} is degenerate: {reason}")]
    DegenerateContact {
        entity: Entity,
        other: Entity,
        reason: &'static str,
    },
}

impl PhysicsError {
    pub fn missing<T>(entity: Entity) -> Self {
        Self::MissingComponent {
            entity,
            component: short_type_name::<T>(),
        }
    }

    /// Report an error the frame can recover from by skipping the entity.
    ///
    /// Missing components and dangling meshes fail loudly in debug builds.
    pub fn report(&self) {
        match self {
            Self::DegenerateContact { .. } => tracing::trace!(error = %self, "skipping pair"),
            _ => {
                tracing::error!(error = %self, "skipping entity");
                if cfg!(debug_assertions) {
                    panic!("{self}");
                }
            }
        }
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
