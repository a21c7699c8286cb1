//! Cluster and program catalog offered by the registration form

/// Clusters with the courses/programs each one offers, in display order
pub const CLUSTER_PROGRAMS: &[(&str, &[&str])] = &[
    ("Accountancy", &["BS Accountancy", "BS Management Accounting"]),
    (
        "Business & Management",
        &[
            "BS Business Management",
            "BS Entrepreneurship",
            "BS Entrepreneurship Major in Agribusiness",
            "BS Finance",
            "BS Marketing",
            "Bachelor in Public Management",
            "BS Human Resource Development and Management",
        ],
    ),
    (
        "Computer Studies Cluster",
        &[
            "BS Computer Science",
            "BS Data Science",
            "BS Information Technology",
            "BS Information Systems",
        ],
    ),
    (
        "Humanities & Letters Cluster",
        &[
            "AB Communications",
            "AB English Language",
            "AB Interdisciplinary Studies",
            "Minor in Language and Literature",
            "Minor in Media and Business",
            "Minor in Media and Technology",
            "Minor in Media and Philosophy",
            "Minor in Philosophy and Theology",
            "AB Philosophy",
        ],
    ),
    (
        "Natural Sciences & Mathematics",
        &[
            "BS Biology",
            "Major in General Biology",
            "Major in Medical Biology",
            "BS Chemistry",
            "BS Environmental Science",
            "BS Mathematics",
        ],
    ),
    (
        "School of Education",
        &[
            "B Early Childhood Education",
            "B Elementary Education",
            "B Secondary Education",
            "Major in English",
            "Major in Mathematics",
            "Major in Science",
            "Major in Social Studies",
        ],
    ),
    (
        "School of Engineering and Architecture",
        &[
            "BS Aerospace Engineering",
            "BS Architecture",
            "BS Chemical Engineering",
            "BS Civil Engineering",
            "BS Computer Engineering",
            "BS Electrical Engineering",
            "BS Electronics Engineering",
            "BS Industrial Engineering",
            "BS Mechanical Engineering",
            "BS Robotics Engineering",
        ],
    ),
    ("School of Nursing", &["BS Nursing"]),
    (
        "Social Sciences",
        &[
            "AB Anthropology - Academic Research",
            "AB Anthropology - Community Development/Social Enterprise (COMDEV)",
            "AB Anthropology - IP Education",
            "AB Anthropology - Medical Anthropology",
            "AB Development Studies",
            "AB Economics",
            "AB International Studies",
            "Major in American Studies",
            "Major in Asian Studies",
            "Major in Islamic Studies",
            "AB Political Science",
            "AB Psychology",
            "AB Sociology",
        ],
    ),
];

/// Cluster names for the cluster dropdown
pub fn clusters() -> impl Iterator<Item = &'static str> {
    CLUSTER_PROGRAMS.iter().map(|(cluster, _)| *cluster)
}

/// Programs offered by a cluster; `None` for an unknown cluster
pub fn programs_for(cluster: &str) -> Option<&'static [&'static str]> {
    let cluster = cluster.trim();
    CLUSTER_PROGRAMS
        .iter()
        .find(|(name, _)| *name == cluster)
        .map(|(_, programs)| *programs)
}

/// Whether `course` is one of the programs of `cluster`
pub fn offers(cluster: &str, course: &str) -> bool {
    programs_for(cluster).is_some_and(|programs| programs.contains(&course.trim()))
}
