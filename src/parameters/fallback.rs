/*
MIT License with Cowan Code Attribution

Copyright (c) 2025 Ameyanagi

Drives the RCN, RCN2 and RCG atomic structure programs of R. D. Cowan,
distributed separately, as external tools.
*/

//! Static parameter tables used when RCG reports no parameter names
//!
//! The solver prints F^k within each shell holding more than one particle,
//! spin-orbit constants of each open shell with l > 0, then F^k and G^k
//! between the two shells when both are open. Shells with one electron or
//! one hole have no F^k of their own.

use super::names::ParameterName;
use crate::configuration::{Configuration, ParticleClass, Shell};

/// Which shell of the configuration a template refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Core,
    Valence,
}

/// One entry of a fallback table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    Slater(&'static str, Role, Role),
    SpinOrbit(Role),
}

/// Slater integrals between a core and a valence shell
#[derive(Debug, Clone, Copy)]
struct PairTerms {
    direct: &'static [&'static str],
    exchange: &'static [&'static str],
}

impl PairTerms {
    /// Shell-pair families with a table; `None` for any other pair
    fn for_shells(core: Shell, valence: Shell) -> Option<Self> {
        use Shell::{D, F, P, S};

        let terms = match (core, valence) {
            (S, D) => PairTerms {
                direct: &[],
                exchange: &["G2"],
            },
            (P, D) => PairTerms {
                direct: &["F2"],
                exchange: &["G1", "G3"],
            },
            (S, F) => PairTerms {
                direct: &[],
                exchange: &["G3"],
            },
            (P, F) => PairTerms {
                direct: &["F2"],
                exchange: &["G2", "G4"],
            },
            (D, F) => PairTerms {
                direct: &["F2", "F4"],
                exchange: &["G1", "G3", "G5"],
            },
            _ => return None,
        };
        Some(terms)
    }
}

/// F^k within one shell
fn within_shell(shell: Shell) -> &'static [&'static str] {
    match shell {
        Shell::S => &[],
        Shell::P => &["F2"],
        Shell::D => &["F2", "F4"],
        Shell::F => &["F2", "F4", "F6"],
    }
}

/// Key of a fallback table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackKey {
    /// A single valence shell
    Valence { shell: Shell, class: ParticleClass },
    /// A core shell below a valence shell
    CoreValence {
        core: Shell,
        core_class: ParticleClass,
        valence: Shell,
        valence_class: ParticleClass,
    },
}

impl FallbackKey {
    pub fn for_configuration(configuration: &Configuration) -> Self {
        let valence = configuration.valence();
        match configuration.core() {
            Some(core) => FallbackKey::CoreValence {
                core: core.subshell.shell,
                core_class: core.particle_class(),
                valence: valence.subshell.shell,
                valence_class: valence.particle_class(),
            },
            None => FallbackKey::Valence {
                shell: valence.subshell.shell,
                class: valence.particle_class(),
            },
        }
    }

    fn templates(self) -> Option<Vec<Template>> {
        use ParticleClass::{Multiple, Zero};
        use Role::{Core as C, Valence as V};

        let (core, valence, valence_class) = match self {
            FallbackKey::Valence { shell, class } => (None, shell, class),
            FallbackKey::CoreValence {
                core,
                core_class,
                valence,
                valence_class,
            } => {
                let pair = PairTerms::for_shells(core, valence)?;
                (Some((core, core_class, pair)), valence, valence_class)
            }
        };
        if !matches!(valence, Shell::D | Shell::F) {
            return None;
        }

        let mut templates = Vec::new();

        if let Some((shell, Multiple, _)) = core {
            templates.extend(within_shell(shell).iter().map(|&k| Template::Slater(k, C, C)));
        }
        if valence_class == Multiple {
            templates.extend(within_shell(valence).iter().map(|&k| Template::Slater(k, V, V)));
        }

        if let Some((shell, class, _)) = core {
            if shell != Shell::S && class != Zero {
                templates.push(Template::SpinOrbit(C));
            }
        }
        if valence_class != Zero {
            templates.push(Template::SpinOrbit(V));
        }

        if let Some((_, core_class, pair)) = core {
            if core_class != Zero && valence_class != Zero {
                templates.extend(pair.direct.iter().map(|&k| Template::Slater(k, C, V)));
                templates.extend(pair.exchange.iter().map(|&k| Template::Slater(k, C, V)));
            }
        }

        Some(templates)
    }
}

/// Parameter names of `configuration` taken from the static tables
///
/// Returns `None` when no table covers the configuration.
pub fn fallback_names(configuration: &Configuration) -> Option<Vec<ParameterName>> {
    let templates = FallbackKey::for_configuration(configuration).templates()?;

    let valence = configuration.valence().subshell;
    // Core templates only exist for core-valence keys
    let core = configuration.core().map(|c| c.subshell).unwrap_or(valence);
    let subshell = |role: Role| match role {
        Role::Core => core,
        Role::Valence => valence,
    };

    let names = templates
        .into_iter()
        .map(|template| match template {
            Template::Slater(kind, first, second) => ParameterName::Slater {
                kind: kind.to_string(),
                first: subshell(first),
                second: subshell(second),
            },
            Template::SpinOrbit(role) => ParameterName::SpinOrbit(subshell(role)),
        })
        .collect();
    Some(names)
}
