use morph_core::{named_object, Configurable, EnergyKind, Named, ParameterList};

/// Component with no configurable state; exercises the trait defaults.
struct IdentityTransform;

named_object!(IdentityTransform);

impl Configurable for IdentityTransform {}

/// Spring force with a small parameter vocabulary.
struct SpringForce {
    weight: f64,
    rest_length: f64,
}

named_object!(SpringForce);

impl Default for SpringForce {
    fn default() -> Self {
        Self {
            weight: 1.0,
            rest_length: 0.0,
        }
    }
}

impl Configurable for SpringForce {
    fn set(&mut self, name: &str, value: &str) -> bool {
        match name {
            "Weight" => match value.parse() {
                Ok(weight) => {
                    self.weight = weight;
                    true
                }
                Err(_) => false,
            },
            "Rest length" => match value.parse() {
                Ok(length) => {
                    self.rest_length = length;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }

    fn parameters(&self) -> ParameterList {
        let mut params = ParameterList::new();
        params
            .insert("Weight", self.weight)
            .insert("Rest length", self.rest_length);
        params
    }
}

/// Similarity term whose reported class name follows its configured kind.
struct SimilarityTerm {
    kind: EnergyKind,
}

impl Named for SimilarityTerm {
    fn type_name() -> &'static str {
        "SimilarityTerm"
    }

    fn class_name(&self) -> &str {
        self.kind.as_str()
    }
}

impl Configurable for SimilarityTerm {
    fn set(&mut self, name: &str, value: &str) -> bool {
        if name != "Similarity measure" {
            return false;
        }
        match EnergyKind::from_name(value) {
            Some(kind) => {
                self.kind = kind;
                true
            }
            None => false,
        }
    }

    fn parameters(&self) -> ParameterList {
        let mut params = ParameterList::new();
        params.insert("Similarity measure", self.kind);
        params
    }
}

#[test]
fn named_object_fixes_both_names() {
    assert_eq!(SpringForce::type_name(), "SpringForce");
    assert_eq!(SpringForce::default().class_name(), "SpringForce");
}

#[test]
fn default_contract_rejects_everything() {
    let mut identity = IdentityTransform;
    assert!(!identity.set("Weight", "1"));
    assert!(identity.parameters().is_empty());
    // Applying a non-empty list to a default component is a no-op.
    identity.set_parameters(&[("Weight", "1")].into_iter().collect());
    assert!(identity.parameters().is_empty());
}

#[test]
fn set_reports_unknown_name_and_bad_value_alike() {
    let mut force = SpringForce::default();
    assert!(force.set("Weight", "0.5"));
    assert!(!force.set("Stiffness", "0.5"));
    assert!(!force.set("Weight", "heavy"));
    // The rejected assignments left the accepted one intact.
    assert_eq!(force.weight, 0.5);
}

#[test]
fn parameters_report_current_state_in_stable_order() {
    let mut force = SpringForce::default();
    force.set("Rest length", "2.5");

    let params = force.parameters();
    let names: Vec<&str> = params.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["Weight", "Rest length"]);
    assert_eq!(params.get("Weight"), "1");
    assert_eq!(params.get("Rest length"), "2.5");
}

#[test]
fn apply_all_is_not_transactional() {
    let mut force = SpringForce::default();
    let params: ParameterList = [
        ("Weight", "0.25"),
        ("Stiffness", "3"),
        ("Rest length", "1.5"),
    ]
    .into_iter()
    .collect();

    force.set_parameters(&params);

    // The unrecognized middle entry was skipped, the others applied.
    assert_eq!(force.weight, 0.25);
    assert_eq!(force.rest_length, 1.5);
}

#[test]
fn mutable_class_name_follows_state() {
    let mut term = SimilarityTerm {
        kind: EnergyKind::Unknown,
    };
    assert_eq!(SimilarityTerm::type_name(), "SimilarityTerm");
    assert_eq!(term.class_name(), "Unknown");

    assert!(term.set("Similarity measure", "NMI"));
    assert_eq!(term.class_name(), "NMI");

    // Aliases resolve through the same path as canonical names.
    assert!(term.set("Similarity measure", "NCC"));
    assert_eq!(term.class_name(), "LNCC");
}

#[test]
fn contract_is_object_safe() {
    let mut components: Vec<Box<dyn Configurable>> = vec![
        Box::new(IdentityTransform),
        Box::new(SpringForce::default()),
        Box::new(SimilarityTerm {
            kind: EnergyKind::SumOfSquaredDifferences,
        }),
    ];

    let config: ParameterList = [("Weight", "0.75")].into_iter().collect();
    for component in &mut components {
        component.set_parameters(&config);
    }

    let names: Vec<String> = components
        .iter()
        .map(|component| component.class_name().to_string())
        .collect();
    assert_eq!(names, ["IdentityTransform", "SpringForce", "SSD"]);
    assert_eq!(components[1].parameters().get("Weight"), "0.75");
}

#[test]
fn subcomponent_parameters_nest_under_parent_name() {
    let spring = SpringForce::default();
    let mut force_params = ParameterList::new();
    force_params.insert("Implicit surface weight", 2);
    force_params.merge_prefixed(&spring.parameters(), "Spring");

    let names: Vec<&str> = force_params
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["Implicit surface weight", "Spring weight", "Spring rest length"]
    );
}
