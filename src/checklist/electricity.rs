use super::{Check, Checklist, Section};

const INDEX_HTML: &str = "index.html";
const MAP_CONFIG_JS: &str = "js/map-config.js";
const MAIN_CSS: &str = "css/main.css";

/// Published Google Sheets id of the electricity generation permits CSV.
const PERMITS_CSV_ID: &str =
    "2PACX-1vTuFBY3k10223uLmvRWSycRyAea6NjtKVLTHuTnpFMQZgWyxoCqwbXNNjTSY9nTleUoxKDtuuP_bbtn";

fn exists(path: &'static str, label: &'static str) -> Check {
    Check::Exists { path, label }
}

fn contains(path: &'static str, needle: &'static str, label: &'static str) -> Check {
    Check::Contains {
        path,
        needle,
        label,
    }
}

pub fn checklist() -> Checklist {
    Checklist {
        title: "VERIFICACIÓN DE IMPLEMENTACIÓN - MAPA DE ELECTRICIDAD",
        sections: vec![
            Section {
                title: "Archivos principales",
                checks: vec![
                    exists(INDEX_HTML, "index.html"),
                    exists(MAP_CONFIG_JS, "map-config.js"),
                    exists(MAIN_CSS, "main.css"),
                    exists("test_electricity.html", "test_electricity.html"),
                    exists("IMPLEMENTACION_ELECTRICIDAD.md", "Documentación técnica"),
                ],
            },
            Section {
                title: "Leaflet MarkerCluster en index.html",
                checks: vec![
                    contains(INDEX_HTML, "leaflet.markercluster", "Plugin MarkerCluster CSS"),
                    contains(INDEX_HTML, "leaflet.markercluster.js", "Plugin MarkerCluster JS"),
                    contains(INDEX_HTML, r#"id="permit-search""#, "Campo de búsqueda"),
                    contains(INDEX_HTML, r#"id="search-group""#, "Grupo de búsqueda"),
                ],
            },
            Section {
                title: "Configuración en map-config.js",
                checks: vec![
                    contains(MAP_CONFIG_JS, "ELECTRICIDAD", "Sección ELECTRICIDAD"),
                    contains(
                        MAP_CONFIG_JS,
                        "Permisos de Generación de Electricidad",
                        "Nombre del mapa",
                    ),
                    contains(MAP_CONFIG_JS, "useClusters: true", "Configuración de clusters"),
                    contains(MAP_CONFIG_JS, "enableSearch: true", "Habilitación de búsqueda"),
                    contains(MAP_CONFIG_JS, "drawElectricityPermits", "Función de dibujado"),
                    contains(MAP_CONFIG_JS, "electricityMarkersPane", "Pane de marcadores"),
                    contains(MAP_CONFIG_JS, "planta_generacion.png", "Icono personalizado"),
                    contains(MAP_CONFIG_JS, "permitSearchInput", "Listener de búsqueda"),
                ],
            },
            Section {
                title: "Estilos en main.css",
                checks: vec![
                    contains(MAIN_CSS, "marker-cluster-small", "Cluster pequeño (verde)"),
                    contains(MAIN_CSS, "marker-cluster-medium", "Cluster mediano (ámbar)"),
                    contains(MAIN_CSS, "marker-cluster-large", "Cluster grande (rojo)"),
                    contains(MAIN_CSS, "76, 175, 80", "Color verde"),
                    contains(MAIN_CSS, "255, 152, 0", "Color ámbar"),
                    contains(MAIN_CSS, "244, 67, 54", "Color rojo"),
                    contains(MAIN_CSS, "#search-group", "Estilos de búsqueda"),
                ],
            },
            Section {
                title: "Integración con Google Sheets",
                checks: vec![contains(MAP_CONFIG_JS, PERMITS_CSV_ID, "URL del CSV de permisos")],
            },
        ],
        completed: "VERIFICACIÓN COMPLETADA",
        follow_up_intro: "Siguiente paso: Abrir index.html en el navegador y probar:",
        follow_up: vec![
            "Seleccionar ELECTRICIDAD",
            "Seleccionar Permisos de Generación de Electricidad",
            "Verificar clusters de colores (verde, ámbar, rojo)",
            "Verificar iconos de planta en marcadores",
            "Probar búsqueda de permisos",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_checks_in_five_sections() {
        let checklist = checklist();
        assert_eq!(checklist.sections.len(), 5);
        assert_eq!(
            checklist
                .sections
                .iter()
                .map(|s| s.checks.len())
                .collect::<Vec<_>>(),
            vec![5, 4, 8, 7, 1]
        );
    }

    #[test]
    fn keeps_original_wording() {
        let checklist = checklist();
        assert_eq!(
            checklist.title,
            "VERIFICACIÓN DE IMPLEMENTACIÓN - MAPA DE ELECTRICIDAD"
        );
        assert_eq!(checklist.completed, "VERIFICACIÓN COMPLETADA");
        assert_eq!(checklist.sections[0].title, "Archivos principales");
        assert_eq!(checklist.follow_up.len(), 5);
        assert_eq!(checklist.follow_up[4], "Probar búsqueda de permisos");
    }
}
