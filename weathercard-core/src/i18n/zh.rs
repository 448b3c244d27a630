use super::Lang;

pub(super) static LANG: Lang = Lang {
    code: "zh",
    name: "中文",
    day: "日期",
    hi: "最高",
    lo: "最低",
    cond: "天气",
    humidity: "湿度:",
    wind: "风:",
    feels: "体感",
    day_abbreviations: ["周日", "周一", "周二", "周三", "周四", "周五", "周六"],
    cardinals: [
        "北", "北东北", "东北", "东东北", "东", "东东南", "东南", "南东南",
        "南", "南西南", "西南", "西西南", "西", "西西北", "西北", "北西北",
    ],
    conditions: &[
        (0, "晴朗"),
        (1, "大致晴朗"),
        (2, "局部多云"),
        (3, "阴天"),
        (45, "雾"),
        (48, "冻雾"),
        (51, "小毛毛雨"),
        (53, "中毛毛雨"),
        (55, "大毛毛雨"),
        (56, "轻度冻毛毛雨"),
        (57, "重度冻毛毛雨"),
        (61, "小雨"),
        (63, "中雨"),
        (65, "大雨"),
        (66, "轻度冻雨"),
        (67, "重度冻雨"),
        (71, "小雪"),
        (73, "中雪"),
        (75, "大雪"),
        (77, "雪粒"),
        (80, "小阵雨"),
        (81, "中阵雨"),
        (82, "强阵雨"),
        (85, "小阵雪"),
        (86, "大阵雪"),
        (95, "雷暴"),
        (96, "雷暴伴小冰雹"),
        (99, "雷暴伴大冰雹"),
    ],
    tip_manual_location: "提示: 使用 --city 或 --lat/--lon 手动指定位置",
};
