mod generation;
mod poke_type;
mod pokemon;
mod user;
