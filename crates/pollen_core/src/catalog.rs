//! Fixed catalog of Cerrado pollen species the mock classifier draws from.
//!
//! Values are kept exactly as catalogued; the per-record probability tables
//! are not renormalized even where rounding leaves them summing slightly off
//! 1.0.

use crate::Prediction;
use once_cell::sync::Lazy;

fn record(label: &str, confidence: f32, probabilities: &[(&str, f32)]) -> Prediction {
    Prediction {
        label: label.to_string(),
        confidence,
        probabilities: Some(
            probabilities
                .iter()
                .map(|(species, p)| (species.to_string(), *p))
                .collect(),
        ),
    }
}

static CATALOG: Lazy<Vec<Prediction>> = Lazy::new(|| {
    vec![
        record(
            "Anadenanthera colubrina",
            0.92,
            &[
                ("Anadenanthera colubrina", 0.92),
                ("Mimosa pudica", 0.04),
                ("Acacia polyphylla", 0.03),
                ("Inga vera", 0.01),
            ],
        ),
        record(
            "Byrsonima verbascifolia",
            0.89,
            &[
                ("Byrsonima verbascifolia", 0.89),
                ("Byrsonima coccolobifolia", 0.06),
                ("Byrsonima crassa", 0.03),
                ("Heteropterys byrsonimifolia", 0.02),
            ],
        ),
        record(
            "Curatella americana",
            0.94,
            &[
                ("Curatella americana", 0.94),
                ("Davilla elliptica", 0.03),
                ("Doliocarpus dentatus", 0.02),
                ("Tetracera breyniana", 0.01),
            ],
        ),
        record(
            "Dipteryx alata",
            0.87,
            &[
                ("Dipteryx alata", 0.87),
                ("Bowdichia virgilioides", 0.07),
                ("Platypodium elegans", 0.04),
                ("Machaerium acutifolium", 0.02),
            ],
        ),
        record(
            "Eugenia dysenterica",
            0.91,
            &[
                ("Eugenia dysenterica", 0.91),
                ("Psidium guajava", 0.05),
                ("Campomanesia adamantium", 0.03),
                ("Myrcia bella", 0.01),
            ],
        ),
        record(
            "Hancornia speciosa",
            0.88,
            &[
                ("Hancornia speciosa", 0.88),
                ("Aspidosperma tomentosum", 0.06),
                ("Himatanthus obovatus", 0.04),
                ("Tabernaemontana hystrix", 0.02),
            ],
        ),
        record(
            "Kielmeyera coriacea",
            0.93,
            &[
                ("Kielmeyera coriacea", 0.93),
                ("Kielmeyera speciosa", 0.04),
                ("Calophyllum brasiliense", 0.02),
                ("Vismia guianensis", 0.01),
            ],
        ),
        record(
            "Mauritia flexuosa",
            0.96,
            &[
                ("Mauritia flexuosa", 0.96),
                ("Syagrus oleracea", 0.02),
                ("Attalea speciosa", 0.01),
                ("Acrocomia aculeata", 0.01),
            ],
        ),
        record(
            "Qualea grandiflora",
            0.90,
            &[
                ("Qualea grandiflora", 0.90),
                ("Qualea parviflora", 0.05),
                ("Vochysia thyrsoidea", 0.03),
                ("Salvertia convallariodora", 0.02),
            ],
        ),
        record(
            "Stryphnodendron adstringens",
            0.85,
            &[
                ("Stryphnodendron adstringens", 0.85),
                ("Dimorphandra mollis", 0.08),
                ("Plathymenia reticulata", 0.05),
                ("Enterolobium gummiferum", 0.02),
            ],
        ),
        record(
            "Tabebuia aurea",
            0.89,
            &[
                ("Tabebuia aurea", 0.89),
                ("Handroanthus ochraceus", 0.06),
                ("Cybistax antisyphilitica", 0.03),
                ("Jacaranda brasiliana", 0.02),
            ],
        ),
        record(
            "Vellozia squamata",
            0.92,
            &[
                ("Vellozia squamata", 0.92),
                ("Barbacenia flava", 0.04),
                ("Vellozia compacta", 0.03),
                ("Barbacenia purpurea", 0.01),
            ],
        ),
    ]
});

/// All twelve catalogued species records.
pub fn species_catalog() -> &'static [Prediction] {
    &CATALOG
}
