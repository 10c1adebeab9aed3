use glam::Vec2;

use crate::error::PhysicsError;

/// Index into the MeshStore resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle(pub usize);

/// Polygon outline in local space, shared by every entity using the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec2>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }
}

/// Holds all loaded meshes. Entities reference meshes by MeshHandle index.
#[derive(Debug, Default)]
pub struct MeshStore {
    meshes: Vec<Mesh>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    pub fn add(&mut self, mesh: Mesh) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(mesh);
        handle
    }

    pub fn get(&self, handle: MeshHandle) -> Result<&Mesh, PhysicsError> {
        self.meshes
            .get(handle.0)
            .ok_or(PhysicsError::UnknownMesh { handle: handle.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_sequential_and_dangling_handles_error() {
        let mut store = MeshStore::new();
        let a = store.add(Mesh::new(vec![Vec2::ZERO]));
        let b = store.add(Mesh::new(vec![Vec2::ONE, Vec2::X]));
        assert_eq!(a, MeshHandle(0));
        assert_eq!(b, MeshHandle(1));
        assert_eq!(store.get(b).unwrap().vertices.len(), 2);
        assert!(matches!(
            store.get(MeshHandle(7)),
            Err(PhysicsError::UnknownMesh { handle: 7 })
        ));
    }
}
