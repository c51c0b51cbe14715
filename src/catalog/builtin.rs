use crate::models::{Category::*, Question};

// Option order is visual, auditory, kinesthetic for every question.
pub(super) fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "Wie lernst du am besten?",
            vec![
                ("Indem ich Bilder sehe", Visual),
                ("Indem ich zuhöre", Auditory),
                ("Indem ich es selbst mache", Kinesthetic),
            ],
        ),
        Question::new(
            "Wenn du eine neue Fähigkeit lernst, bevorzugst du…",
            vec![
                ("Bilder oder Diagramme", Visual),
                ("Erklärungen anhören", Auditory),
                ("Es ausprobieren", Kinesthetic),
            ],
        ),
        Question::new(
            "Wenn du eine Wegbeschreibung bekommst, ist es einfacher für dich…",
            vec![
                ("Eine Karte zu sehen", Visual),
                ("Die Richtung zu hören", Auditory),
                ("Den Weg selbst zu gehen", Kinesthetic),
            ],
        ),
        Question::new(
            "Wenn du etwas Neues lernst, was hilft dir mehr?",
            vec![
                ("Visuelle Darstellungen", Visual),
                ("Gesprochene Anweisungen", Auditory),
                ("Praktische Erfahrungen", Kinesthetic),
            ],
        ),
        Question::new(
            "Wie kannst du dir am besten eine Geschichte merken?",
            vec![
                ("Indem ich sie sehe", Visual),
                ("Indem ich sie höre", Auditory),
                ("Indem ich sie nachspiele", Kinesthetic),
            ],
        ),
        Question::new(
            "Was hilft dir, Informationen besser zu behalten?",
            vec![
                ("Grafiken und Diagramme", Visual),
                ("Audioaufnahmen und Erklärungen", Auditory),
                ("Selbst ausprobieren und Üben", Kinesthetic),
            ],
        ),
        Question::new(
            "Wenn du an einen Ort reist, was ist für dich am hilfreichsten?",
            vec![
                ("Ein Stadtplan", Visual),
                ("Jemand, der dir den Weg beschreibt", Auditory),
                ("Die Umgebung selbst zu erkunden", Kinesthetic),
            ],
        ),
        Question::new(
            "Wie gehst du mit neuen Aufgaben um?",
            vec![
                ("Ich schaue mir Beispiele an", Visual),
                ("Ich frage nach Erklärungen", Auditory),
                ("Ich versuche, es direkt zu tun", Kinesthetic),
            ],
        ),
        Question::new(
            "Wenn du versuchst, dich an etwas zu erinnern, wie gehst du vor?",
            vec![
                ("Ich visualisiere es", Visual),
                ("Ich höre die Information nochmal", Auditory),
                ("Ich stelle es mir vor und tue es", Kinesthetic),
            ],
        ),
        Question::new(
            "Welche Methode bevorzugst du beim Erlernen von Sprachen?",
            vec![
                ("Bilder und Flashcards", Visual),
                ("Hören von Gesprächen", Auditory),
                ("Sprechen und Üben", Kinesthetic),
            ],
        ),
        Question::new(
            "Welche Art von Anweisungen bevorzugst du?",
            vec![
                ("Visuelle Anleitungen", Visual),
                ("Mündliche Erklärungen", Auditory),
                ("Praktische Übungen", Kinesthetic),
            ],
        ),
        Question::new(
            "Was hilft dir, dich an den Ablauf eines Ereignisses zu erinnern?",
            vec![
                ("Einen Zeitstrahl zu sehen", Visual),
                ("Den Ablauf zu hören", Auditory),
                ("Den Ablauf selbst zu erleben", Kinesthetic),
            ],
        ),
        Question::new(
            "Wie lernst du am besten komplexe Informationen?",
            vec![
                ("Durch Diagramme und Visualisierungen", Visual),
                ("Indem ich jemandem zuhöre", Auditory),
                ("Indem ich es ausprobiere", Kinesthetic),
            ],
        ),
        Question::new(
            "Wenn du dich auf eine Präsentation vorbereitest, was bevorzugst du?",
            vec![
                ("Visuelle Hilfsmittel wie Folien", Visual),
                ("Den Vortrag zu hören", Auditory),
                ("Praktische Übungen", Kinesthetic),
            ],
        ),
        Question::new(
            "Wie gehst du mit einer neuen Aufgabe um, die du noch nie gemacht hast?",
            vec![
                ("Ich schaue mir ein Beispiel an", Visual),
                ("Ich lasse mir die Schritte erklären", Auditory),
                ("Ich probiere es direkt aus", Kinesthetic),
            ],
        ),
        Question::new(
            "Welche Art von Lernumgebung bevorzugst du?",
            vec![
                ("Eine visuelle Umgebung mit vielen Bildern", Visual),
                ("Eine ruhige, in der ich zuhören kann", Auditory),
                ("Eine Umgebung, in der ich aktiv sein kann", Kinesthetic),
            ],
        ),
        Question::new(
            "Wie behältst du Informationen, die du in einem Meeting gehört hast?",
            vec![
                ("Indem ich mir Notizen mache", Visual),
                ("Indem ich den Inhalt noch einmal höre", Auditory),
                ("Indem ich die besprochenen Themen anwende", Kinesthetic),
            ],
        ),
        Question::new(
            "Was ist für dich der beste Weg, um Anweisungen zu verstehen?",
            vec![
                ("Die Anweisungen zu sehen", Visual),
                ("Die Anweisungen zu hören", Auditory),
                ("Die Anweisungen selbst umzusetzen", Kinesthetic),
            ],
        ),
        Question::new(
            "Wie erinnerst du dich an den Verlauf eines Gesprächs?",
            vec![
                ("Durch visuelle Notizen", Visual),
                ("Durch das Hören der gesprochenen Worte", Auditory),
                ("Durch das Nachspielen des Gesprächs", Kinesthetic),
            ],
        ),
        Question::new(
            "Was ist der effektivste Weg, für dich zu lernen?",
            vec![
                ("Indem ich es sehe", Visual),
                ("Indem ich es höre", Auditory),
                ("Indem ich es tue", Kinesthetic),
            ],
        ),
        Question::new(
            "Wenn du dir etwas merken musst, wie tust du das am liebsten?",
            vec![
                ("Indem ich ein Bild vor meinem inneren Auge sehe", Visual),
                ("Indem ich es laut wiederhole", Auditory),
                ("Indem ich es selbst erfahre", Kinesthetic),
            ],
        ),
    ]
}
