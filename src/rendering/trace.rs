use nalgebra::Vector2;
use std::collections::VecDeque;

use crate::components::Role;
use crate::world::WorldState;

/// Past positions of one object, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TraceBuffer {
    capacity: Option<usize>,
    points: VecDeque<Vector2<f64>>,
}

impl TraceBuffer {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            capacity,
            points: VecDeque::new(),
        }
    }

    pub fn push(&mut self, position: Vector2<f64>) {
        if let Some(cap) = self.capacity {
            while self.points.len() >= cap {
                self.points.pop_front();
            }
        }
        self.points.push_back(position);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2<f64>> {
        self.points.iter()
    }
}

/// Trace buffers for all three objects.
#[derive(Debug, Clone, Default)]
pub struct Traces {
    agent: TraceBuffer,
    target: TraceBuffer,
    hazard: TraceBuffer,
}

impl Traces {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            agent: TraceBuffer::new(capacity),
            target: TraceBuffer::new(capacity),
            hazard: TraceBuffer::new(capacity),
        }
    }

    pub fn record(&mut self, world: &WorldState) {
        self.agent.push(world.agent.position);
        self.target.push(world.target.position);
        self.hazard.push(world.hazard.position);
    }

    pub fn clear(&mut self) {
        self.agent.clear();
        self.target.clear();
        self.hazard.clear();
    }

    pub fn get(&self, role: Role) -> &TraceBuffer {
        match role {
            Role::Agent => &self.agent,
            Role::Target => &self.target,
            Role::Hazard => &self.hazard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_buffer_drops_oldest() {
        let mut buffer = TraceBuffer::new(Some(3));
        for i in 0..5 {
            buffer.push(Vector2::new(i as f64, 0.0));
        }
        let xs: Vec<f64> = buffer.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_unbounded_buffer_keeps_everything() {
        let mut buffer = TraceBuffer::new(None);
        for i in 0..1000 {
            buffer.push(Vector2::new(i as f64, 0.0));
        }
        assert_eq!(buffer.len(), 1000);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_record_all_roles() {
        let world = WorldState::new(
            Vector2::new(0.1, 0.0),
            Vector2::new(0.2, 0.0),
            Vector2::new(0.3, 0.0),
        );
        let mut traces = Traces::new(Some(10));
        traces.record(&world);
        traces.record(&world);

        assert_eq!(traces.get(Role::Agent).len(), 2);
        assert_eq!(traces.get(Role::Hazard).iter().next().unwrap().x, 0.3);
    }
}
