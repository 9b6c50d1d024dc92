//! Built-in first-name lexicon
//!
//! A bundled reference table of given names graded by gender. Lookups
//! fold the query to lowercase; accented and plain spellings are listed
//! separately because uploads carry both.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::traits::NameLexicon;
use crate::types::LexiconVerdict;

use LexiconVerdict::{Androgynous, Female, Male, MostlyFemale, MostlyMale};

/// Lowercase given name to verdict
///
/// Names absent from the table read as [`LexiconVerdict::Unknown`].
const ENTRIES: &[(&str, LexiconVerdict)] = &[
    ("adriana", Female),
    ("adriano", Male),
    ("alessandra", Female),
    ("alex", MostlyMale),
    ("alexandre", Male),
    ("aline", Female),
    ("amanda", Female),
    ("ana", Female),
    ("anderson", Male),
    ("andre", Male),
    ("andré", Male),
    ("andrea", MostlyFemale),
    ("andréa", MostlyFemale),
    ("andressa", Female),
    ("antonia", Female),
    ("antonio", Male),
    ("antônio", Male),
    ("ariel", Androgynous),
    ("arthur", Male),
    ("beatriz", Female),
    ("bernardo", Male),
    ("bianca", Female),
    ("breno", Male),
    ("bruna", Female),
    ("bruno", Male),
    ("caio", Male),
    ("camila", Female),
    ("carla", Female),
    ("carlos", Male),
    ("carolina", Female),
    ("caroline", Female),
    ("cassia", Female),
    ("cássia", Female),
    ("catarina", Female),
    ("cecilia", Female),
    ("cecília", Female),
    ("celia", Female),
    ("célia", Female),
    ("cesar", Male),
    ("césar", Male),
    ("clara", Female),
    ("claudia", Female),
    ("cláudia", Female),
    ("claudio", Male),
    ("cláudio", Male),
    ("cristiane", Female),
    ("cristiano", Male),
    ("cristina", Female),
    ("daniel", Male),
    ("daniela", Female),
    ("danilo", Male),
    ("davi", Male),
    ("débora", Female),
    ("debora", Female),
    ("denise", Female),
    ("diego", Male),
    ("diogo", Male),
    ("dominique", Androgynous),
    ("douglas", Male),
    ("edson", Male),
    ("eduarda", Female),
    ("eduardo", Male),
    ("elaine", Female),
    ("eliane", Female),
    ("elisa", Female),
    ("emanuel", Male),
    ("enzo", Male),
    ("erica", Female),
    ("érica", Female),
    ("fabiana", Female),
    ("fabiano", Male),
    ("fabio", Male),
    ("fábio", Male),
    ("felipe", Male),
    ("fernanda", Female),
    ("fernando", Male),
    ("flavia", Female),
    ("flávia", Female),
    ("flavio", Male),
    ("flávio", Male),
    ("francisca", Female),
    ("francisco", Male),
    ("gabriel", Male),
    ("gabriela", Female),
    ("giovana", Female),
    ("giovanna", Female),
    ("guilherme", Male),
    ("gustavo", Male),
    ("helena", Female),
    ("heloisa", Female),
    ("heloísa", Female),
    ("henrique", Male),
    ("hugo", Male),
    ("igor", Male),
    ("isabel", Female),
    ("isabela", Female),
    ("isabella", Female),
    ("ivan", Male),
    ("jaqueline", Female),
    ("joana", Female),
    ("joao", Male),
    ("joão", Male),
    ("joaquim", Male),
    ("jorge", Male),
    ("jose", Male),
    ("josé", Male),
    ("josefa", Female),
    ("julia", Female),
    ("júlia", Female),
    ("juliana", Female),
    ("julio", Male),
    ("júlio", Male),
    ("jussara", Female),
    ("karina", Female),
    ("kelly", Female),
    ("larissa", Female),
    ("laura", Female),
    ("leandro", Male),
    ("leonardo", Male),
    ("leticia", Female),
    ("letícia", Female),
    ("lilian", Female),
    ("livia", Female),
    ("lívia", Female),
    ("lorena", Female),
    ("lorenzo", Male),
    ("lucas", Male),
    ("lucia", Female),
    ("lúcia", Female),
    ("luciana", Female),
    ("luciano", Male),
    ("luis", Male),
    ("luís", Male),
    ("luiz", Male),
    ("luiza", Female),
    ("luíza", Female),
    ("manoel", Male),
    ("manuela", Female),
    ("marcela", Female),
    ("marcelo", Male),
    ("marcia", Female),
    ("márcia", Female),
    ("marcio", Male),
    ("márcio", Male),
    ("marcos", Male),
    ("margarida", Female),
    ("maria", Female),
    ("mariana", Female),
    ("marina", Female),
    ("mario", Male),
    ("mário", Male),
    ("marta", Female),
    ("mateus", Male),
    ("matheus", Male),
    ("mauricio", Male),
    ("maurício", Male),
    ("michele", Female),
    ("miguel", Male),
    ("milena", Female),
    ("monica", Female),
    ("mônica", Female),
    ("murilo", Male),
    ("natalia", Female),
    ("natália", Female),
    ("nathalia", Female),
    ("nicolas", Male),
    ("otavio", Male),
    ("otávio", Male),
    ("pablo", Male),
    ("patricia", Female),
    ("patrícia", Female),
    ("paula", Female),
    ("paulo", Male),
    ("pedro", Male),
    ("priscila", Female),
    ("rafael", Male),
    ("rafaela", Female),
    ("raimundo", Male),
    ("raquel", Female),
    ("regina", Female),
    ("renan", Male),
    ("renata", Female),
    ("renato", Male),
    ("ricardo", Male),
    ("rita", Female),
    ("roberta", Female),
    ("roberto", Male),
    ("robson", Male),
    ("rodrigo", Male),
    ("rogerio", Male),
    ("rogério", Male),
    ("ronaldo", Male),
    ("rosa", Female),
    ("rosana", Female),
    ("rosangela", Female),
    ("rosângela", Female),
    ("rubens", Male),
    ("samuel", Male),
    ("sandra", Female),
    ("sandro", Male),
    ("sebastiao", Male),
    ("sebastião", Male),
    ("sergio", Male),
    ("sérgio", Male),
    ("silvia", Female),
    ("sílvia", Female),
    ("simone", Female),
    ("sofia", Female),
    ("solange", Female),
    ("sonia", Female),
    ("sônia", Female),
    ("tais", Female),
    ("taís", Female),
    ("talita", Female),
    ("tatiana", Female),
    ("tatiane", Female),
    ("teresa", Female),
    ("thiago", Male),
    ("tiago", Male),
    ("valeria", Female),
    ("valéria", Female),
    ("vanessa", Female),
    ("vera", Female),
    ("vicente", Male),
    ("victor", Male),
    ("vinicius", Male),
    ("vinícius", Male),
    ("vitor", Male),
    ("vitoria", Female),
    ("vitória", Female),
    ("viviane", Female),
    ("wagner", Male),
    ("wallace", Male),
    ("wanderson", Male),
    ("wellington", Male),
    ("wesley", Male),
    ("william", Male),
    ("yasmin", Female),
    ("yuri", Male),
];

static TABLE: Lazy<HashMap<&'static str, LexiconVerdict>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Lexicon backed by the bundled name table
#[derive(Debug, Default)]
pub struct BuiltinLexicon;

impl BuiltinLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl NameLexicon for BuiltinLexicon {
    fn lookup(&self, given_name: &str) -> LexiconVerdict {
        let key = given_name.to_lowercase();
        TABLE
            .get(key.as_str())
            .copied()
            .unwrap_or(LexiconVerdict::Unknown)
    }
}
