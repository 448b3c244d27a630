use super::Lang;

pub(super) static LANG: Lang = Lang {
    code: "it",
    name: "Italiano",
    day: "Giorno",
    hi: "Max",
    lo: "Min",
    cond: "Cond.",
    humidity: "Umidità:",
    wind: "Vento:",
    feels: "perc.",
    day_abbreviations: ["Dom", "Lun", "Mar", "Mer", "Gio", "Ven", "Sab"],
    cardinals: [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
        "S", "SSO", "SO", "OSO", "O", "ONO", "NO", "NNO",
    ],
    conditions: &[
        (0, "Cielo sereno"),
        (1, "Prevalentemente sereno"),
        (2, "Parzialmente nuvoloso"),
        (3, "Coperto"),
        (45, "Nebbia"),
        (48, "Nebbia con brina"),
        (51, "Pioggerella leggera"),
        (53, "Pioggerella moderata"),
        (55, "Pioggerella intensa"),
        (56, "Pioggerella gelata leggera"),
        (57, "Pioggerella gelata intensa"),
        (61, "Pioggia leggera"),
        (63, "Pioggia moderata"),
        (65, "Pioggia forte"),
        (66, "Pioggia gelata leggera"),
        (67, "Pioggia gelata forte"),
        (71, "Neve leggera"),
        (73, "Neve moderata"),
        (75, "Neve forte"),
        (77, "Granelli di neve"),
        (80, "Rovesci leggeri"),
        (81, "Rovesci moderati"),
        (82, "Rovesci violenti"),
        (85, "Rovesci di neve leggeri"),
        (86, "Rovesci di neve forti"),
        (95, "Temporale"),
        (96, "Temporale con grandine leggera"),
        (99, "Temporale con grandine forte"),
    ],
    tip_manual_location: "Suggerimento: Usa --city o --lat/--lon per specificare una posizione manualmente",
};
