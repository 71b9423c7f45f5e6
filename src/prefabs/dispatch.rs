use super::furniture::{bed_basic_wooden, chair_basic_wooden, table_basic_wooden};
use super::{
    GeneratedPrefab, PrefabCreation, PrefabError, PrefabErrorCode, PrefabFailure,
    PrefabGenerationInput,
};

type Generator = fn(&PrefabGenerationInput) -> Result<PrefabCreation, PrefabError>;

const GENERATORS: &[(&str, Generator)] = &[
    ("furniture.chair::basic::wooden", chair_basic_wooden),
    ("furniture.table::basic::wooden", table_basic_wooden),
    ("furniture.bed::basic::wooden", bed_basic_wooden),
];

pub fn registered_prefab_keys() -> impl Iterator<Item = &'static str> {
    GENERATORS.iter().map(|(key, _)| *key)
}

/// Exact-key lookup; no partial matching.
pub fn generate_prefab(input: &PrefabGenerationInput) -> Result<GeneratedPrefab, PrefabFailure> {
    let key = input.dispatch_key();
    let failure = |error: PrefabError| PrefabFailure {
        prefab_key: input.prefab_key.clone(),
        error,
    };

    let Some((_, generator)) = GENERATORS.iter().find(|(registered, _)| *registered == key) else {
        return Err(failure(PrefabError {
            code: PrefabErrorCode::UnsupportedPrefab,
            message: format!("No generator registered for prefab key: {key}."),
            details: Vec::new(),
        }));
    };

    let created = generator(input).map_err(failure)?;
    Ok(GeneratedPrefab {
        prefab_key: input.prefab_key.clone(),
        created,
    })
}
