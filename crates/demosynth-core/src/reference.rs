//! Fixed reference lists for record synthesis.
//!
//! These are read-only: the synthesizer samples from them and
//! [`is_valid_city`] validates free-text input against the city list.

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "María", "Luisa", "Carmen", "Ana", "Sofía", "Isabel", "Laura", "Andrea", "Paula", "Valentina",
    "Camila", "Daniela", "Carolina", "Fernanda", "Gabriela", "Patricia", "Claudia", "Diana",
    "Lucía", "Ximena",
];

pub const MALE_FIRST_NAMES: &[&str] = &[
    "Juan", "Carlos", "José", "James", "Andrés", "Miguel", "Luis", "Pedro", "Alejandro", "Ricardo",
    "Felipe", "David", "Jorge", "Santiago", "Daniel", "Fernando", "Diego", "Rafael", "Martín",
    "Óscar",
];

pub const SURNAMES: &[&str] = &[
    "Gómez", "Rodríguez", "Martínez", "López", "García", "Pérez", "González", "Sánchez", "Ramírez",
    "Torres", "Díaz", "Vargas", "Castro", "Ruiz", "Álvarez", "Romero", "Suárez", "Rojas", "Moreno",
    "Muñoz", "Valencia",
];

pub const CITIES: &[&str] = &[
    "Bogotá", "Medellín", "Cali", "Barranquilla", "Cartagena", "Bucaramanga", "Pereira",
    "Santa Marta", "Cúcuta", "Ibagué", "Manizales", "Pasto", "Neiva", "Villavicencio", "Armenia",
    "Sincelejo", "Valledupar", "Montería", "Popayán", "Tunja",
];

/// Exact, case-sensitive membership test against the fixed city list.
pub fn is_valid_city(name: &str) -> bool {
    CITIES.contains(&name)
}
