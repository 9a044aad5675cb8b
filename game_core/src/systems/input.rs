use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn the held keys into the player paddle's movement intent
pub fn ingest_input(world: &mut World, input: &PlayerInput) {
    for (_entity, (intent, _player)) in world.query_mut::<(&mut PaddleIntent, &Player)>() {
        intent.dir = input.dir();
    }
}
