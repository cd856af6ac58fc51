//! Key concepts and model fundamentals shown in the learning section.

use serde::Serialize;

/// One of the sixteen key concepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyConcept {
    pub name: &'static str,
    pub description: &'static str,
}

/// A labelled point inside a fundamental, e.g. a knowledge level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub label: &'static str,
    pub text: &'static str,
}

/// An expandable explanation of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fundamental {
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [Point],
}

/// Heading of the key concept grid.
pub const KEY_CONCEPTS_HEADING: &str = "Los 16 Conceptos Clave (PAI)";
/// Heading of the fundamentals accordion.
pub const FUNDAMENTALS_HEADING: &str = "Fundamentos del Modelo";
pub const FUNDAMENTALS_SUBTITLE: &str = "Estructura del conocimiento de Lynn Erickson y Lois Lanning";

pub static KEY_CONCEPTS: [KeyConcept; 16] = [
    KeyConcept {
        name: "Estética",
        description: "La apreciación de la belleza y la expresión artística.",
    },
    KeyConcept {
        name: "Cambio",
        description: "La transformación de personas, objetos o entornos a través del tiempo.",
    },
    KeyConcept {
        name: "Comunicación",
        description: "El intercambio de información, pensamientos y sentimientos.",
    },
    KeyConcept {
        name: "Comunidades",
        description: "Grupos de personas unidas por proximidad, intereses o valores.",
    },
    KeyConcept {
        name: "Conexiones",
        description: "Vínculos entre personas, objetos, ideas y sistemas.",
    },
    KeyConcept {
        name: "Creatividad",
        description: "La capacidad de generar nuevas ideas y formas de expresión.",
    },
    KeyConcept {
        name: "Cultura",
        description: "Patrones de creencias, valores y comportamientos compartidos.",
    },
    KeyConcept {
        name: "Desarrollo",
        description: "El proceso de crecimiento, progreso y mejora.",
    },
    KeyConcept {
        name: "Forma",
        description: "La estructura y organización de un objeto o idea.",
    },
    KeyConcept {
        name: "Interacciones",
        description: "Las conexiones y efectos recíprocos entre entidades globales.",
    },
    KeyConcept {
        name: "Identidad",
        description: "Características que definen a una persona o grupo.",
    },
    KeyConcept {
        name: "Lógica",
        description: "El razonamiento y principios que rigen el pensamiento válido.",
    },
    KeyConcept {
        name: "Perspectiva",
        description: "La posición desde la cual se observa o interpreta algo.",
    },
    KeyConcept {
        name: "Relaciones",
        description: "Conexiones y asociaciones entre propiedades, objetos o personas.",
    },
    KeyConcept {
        name: "Sistemas",
        description: "Conjuntos de partes interdependientes que funcionan como un todo.",
    },
    KeyConcept {
        name: "Tiempo, lugar y espacio",
        description: "Las dimensiones físicas y temporales donde ocurren los eventos.",
    },
];

pub static FUNDAMENTALS: [Fundamental; 4] = [
    Fundamental {
        title: "Estructura del Conocimiento",
        summary: "El modelo distingue entre Conocimiento (hechos y temas específicos) y Entendimiento (conceptos y generalizaciones).",
        points: &[
            Point {
                label: "Hechos",
                text: "Datos específicos, intransferibles.",
            },
            Point {
                label: "Temas",
                text: "Categorías organizadoras de hechos.",
            },
            Point {
                label: "Conceptos",
                text: "Ideas mentales atemporales, universales y abstractas (ej: Cambio, Sistema).",
            },
            Point {
                label: "Generalizaciones",
                text: "Enunciados que expresan una relación profunda entre dos o más conceptos.",
            },
        ],
    },
    Fundamental {
        title: "Sinergia Intelectual",
        summary: "El aprendizaje profundo ocurre cuando el pensamiento factual (nivel bajo) y el pensamiento conceptual (nivel alto) interactúan. Los hechos proveen la base para construir conceptos, y los conceptos proveen el significado para retener los hechos.",
        points: &[],
    },
    Fundamental {
        title: "Transferencia",
        summary: "El objetivo final es la transferencia. Cuando un estudiante comprende un concepto (ej: \"El poder corrompe\"), puede aplicar ese entendimiento a nuevas situaciones, tiempos o lugares que nunca ha estudiado antes.",
        points: &[],
    },
    Fundamental {
        title: "Indagación por Conceptos",
        summary: "Las preguntas guía son clave para dirigir el pensamiento:",
        points: &[
            Point {
                label: "Fácticas",
                text: "Piden hechos. (¿Qué es...?)",
            },
            Point {
                label: "Conceptuales",
                text: "Exploran relaciones e ideas amplias. (¿Cómo influye el poder en...?)",
            },
            Point {
                label: "Debatibles",
                text: "Promueven perspectivas y juicio crítico. (¿Es el poder siempre corruptor?)",
            },
        ],
    },
];
