use super::Lang;

pub(super) static LANG: Lang = Lang {
    code: "fr",
    name: "Français",
    day: "Jour",
    hi: "Max",
    lo: "Min",
    cond: "Cond.",
    humidity: "Humidité:",
    wind: "Vent:",
    feels: "ress.",
    day_abbreviations: ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"],
    cardinals: [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE",
        "S", "SSO", "SO", "OSO", "O", "ONO", "NO", "NNO",
    ],
    conditions: &[
        (0, "Ciel dégagé"),
        (1, "Principalement dégagé"),
        (2, "Partiellement nuageux"),
        (3, "Couvert"),
        (45, "Brouillard"),
        (48, "Brouillard givrant"),
        (51, "Bruine légère"),
        (53, "Bruine modérée"),
        (55, "Bruine dense"),
        (56, "Bruine verglaçante légère"),
        (57, "Bruine verglaçante dense"),
        (61, "Pluie légère"),
        (63, "Pluie modérée"),
        (65, "Pluie forte"),
        (66, "Pluie verglaçante légère"),
        (67, "Pluie verglaçante forte"),
        (71, "Neige légère"),
        (73, "Neige modérée"),
        (75, "Neige forte"),
        (77, "Grains de neige"),
        (80, "Averses légères"),
        (81, "Averses modérées"),
        (82, "Averses violentes"),
        (85, "Averses de neige légères"),
        (86, "Averses de neige fortes"),
        (95, "Orage"),
        (96, "Orage avec grêle légère"),
        (99, "Orage avec forte grêle"),
    ],
    tip_manual_location: "Conseil: Utilisez --city ou --lat/--lon pour spécifier un lieu manuellement",
};
