//! Static educational content shown after a positive result, keyed by narration key.

pub struct Section {
    pub heading: &'static str,
    pub points: &'static [&'static str],
}

pub struct Guidance {
    pub warning: &'static str,
    pub risks: &'static [&'static str],
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [Section],
}

static DIABETES: Guidance = Guidance {
    warning: "Untreated diabetes may lead to:",
    risks: &["Kidney Disease", "Heart Disease", "Vision Loss"],
    title: "What Happens When Diabetes Goes Untreated?",
    intro: "Diabetes silently damages organs and systems throughout the body. \
            The elevated blood glucose acts like a corrosive agent over time.",
    sections: &[
        Section {
            heading: "Brain & Cognitive Function",
            points: &[
                "Studies show increased risk of vascular dementia and cognitive decline.",
                "Some researchers link long-term diabetes with a 50-100% increased risk of Alzheimer's disease.",
            ],
        },
        Section {
            heading: "Heart and Blood Vessels",
            points: &[
                "Diabetics are 2-4x more likely to suffer heart attacks or strokes.",
                "Chronic high blood sugar stiffens blood vessels, accelerating atherosclerosis.",
            ],
        },
        Section {
            heading: "Nerves",
            points: &[
                "Diabetic neuropathy causes tingling, numbness, or burning sensations, often in the legs and feet.",
                "More than 50% of diabetics experience some form of nerve damage.",
            ],
        },
        Section {
            heading: "Eyes",
            points: &[
                "Retinopathy is caused by damage to the small blood vessels in the retina.",
                "Diabetes is the leading cause of blindness in working-age adults.",
            ],
        },
        Section {
            heading: "Kidneys",
            points: &[
                "Known as diabetic nephropathy, it begins with protein in urine and can end in kidney failure.",
                "Diabetes accounts for nearly 44% of all new cases of kidney failure in the U.S.",
            ],
        },
        Section {
            heading: "Global Snapshot",
            points: &[
                "Over 537 million people live with diabetes (IDF, 2023).",
                "1 in 10 adults globally is affected.",
                "Diabetes leads to 6.7 million deaths each year (that's one every 5 seconds).",
            ],
        },
    ],
};

static HEART_DISEASE: Guidance = Guidance {
    warning: "Untreated heart disease may lead to:",
    risks: &["Stroke", "Kidney Damage", "Heart Failure"],
    title: "Why You Should Never Ignore Heart Disease",
    intro: "Heart disease isn't just about the heart. \
            It's about your entire circulatory system, and beyond.",
    sections: &[
        Section {
            heading: "Stroke Risk",
            points: &[
                "Heart disease doubles the risk of stroke by promoting clots and blocking arteries to the brain.",
                "1 in 4 stroke survivors has another stroke within 5 years.",
            ],
        },
        Section {
            heading: "Heart Failure",
            points: &[
                "Over time, your heart struggles to keep up with the body's needs.",
                "Fluid may build up in the lungs, legs, and other areas, making daily life difficult.",
            ],
        },
        Section {
            heading: "Kidney Breakdown",
            points: &[
                "Your kidneys rely on steady blood flow.",
                "When the heart fails, kidneys suffer too, increasing the chance of permanent damage.",
            ],
        },
        Section {
            heading: "Amputation Risk",
            points: &[
                "Reduced circulation and arterial blockage, especially in people with both heart disease and diabetes, can lead to limb loss.",
            ],
        },
        Section {
            heading: "Sudden Cardiac Arrest",
            points: &["50% of people who die suddenly from heart issues had no prior symptoms."],
        },
        Section {
            heading: "By the Numbers",
            points: &[
                "17.9 million global deaths per year (WHO).",
                "Leading cause of death globally for over two decades.",
                "Costs the world economy $1 trillion annually in productivity loss and treatment.",
            ],
        },
    ],
};

pub fn lookup(key: &str) -> Option<&'static Guidance> {
    match key {
        "diabetes.untreated-risks" => Some(&DIABETES),
        "heart-disease.untreated-risks" => Some(&HEART_DISEASE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiseaseId;
    use crate::report::narrator::narration_key;

    #[test]
    fn every_narration_key_has_content() {
        for disease in DiseaseId::ALL {
            let guidance = lookup(narration_key(disease)).expect("guidance for key");
            assert_eq!(guidance.risks.len(), 3);
            assert!(!guidance.sections.is_empty());
        }
        assert!(lookup("unknown").is_none());
    }
}
