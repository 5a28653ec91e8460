mod material_life;
mod particle_ops;
mod processed;
